//! Element tree for the contact form.

use tuidom::{Color, Edges, Element, Role, Size, Style, View};

use crate::field::Field;
use crate::form::{ContactForm, SUBMIT_ID};
use crate::state::SubmittedValues;

const INPUT_WIDTH: u16 = 40;

fn background() -> Color {
    Color::oklch(0.18, 0.01, 250.0)
}

fn input_background() -> Color {
    Color::oklch(0.26, 0.02, 250.0)
}

fn focus_background() -> Color {
    Color::oklch(0.34, 0.06, 250.0)
}

fn error_color() -> Color {
    Color::oklch(0.68, 0.19, 25.0)
}

fn muted() -> Color {
    Color::oklch(0.72, 0.02, 250.0)
}

pub(crate) fn render(form: &ContactForm, view: &View<'_>) -> Element {
    let fields = Field::ALL.into_iter().map(|field| field_group(form, view, field));

    let mut root = Element::col()
        .id("contact-form")
        .role(Role::Form)
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::symmetric(1, 2))
        .gap(1)
        .style(Style::new().background(background()))
        .child(
            Element::text("Contact Form")
                .role(Role::Heading)
                .style(Style::new().bold()),
        )
        .children(fields)
        .child(
            view.button(SUBMIT_ID, "Submit")
                .padding(Edges::symmetric(0, 2))
                .style(Style::new().background(input_background()).bold())
                .style_focused(Style::new().background(focus_background())),
        );

    if let Some(values) = form.displayed_submission() {
        root = root.child(summary(values));
    }

    root
}

fn field_group(form: &ContactForm, view: &View<'_>, field: Field) -> Element {
    let id = field.id();
    let input = if field.is_multiline() {
        view.text_area(id)
    } else {
        view.text_input(id)
    };
    let input = match field.placeholder() {
        Some(placeholder) => input.placeholder(placeholder),
        None => input,
    }
    .width(Size::Fixed(INPUT_WIDTH))
    .style(Style::new().background(input_background()))
    .style_focused(Style::new().background(focus_background()));

    let mut group = Element::col()
        .id(format!("{id}-group"))
        .child(Element::text(field.label()).label_for(id))
        .child(input);

    if let Some(error) = form.errors().get(field) {
        group = group.child(
            Element::text(format!("Error: {error}"))
                .id(format!("{id}-error"))
                .test_id("error")
                .style(Style::new().foreground(error_color())),
        );
    }

    group
}

/// Read-only echo of an accepted submission.
fn summary(values: &SubmittedValues) -> Element {
    let lines = values.entries().map(|(field, value)| {
        Element::text(format!("{}: {value}", field.summary_label()))
            .id(format!("submitted-{}", field.id()))
    });

    Element::col()
        .id("display")
        .child(
            Element::text("You Submitted:")
                .role(Role::Heading)
                .style(Style::new().foreground(muted()).bold()),
        )
        .children(lines)
}
