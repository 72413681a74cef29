// Form field rendering

use folio_core::{Field, Widget};
use maud::{html, Markup};

/// Render a labelled control for `field`. The label doubles as placeholder,
/// `css` is applied as the control's class and required fields get the
/// `required` attribute.
pub fn form_row(field: &Field, css: &str) -> Markup {
    let id = format!("id_{}", field.name);
    let has_errors = !field.errors.is_empty();

    html! {
        div.field.has-error[has_errors] {
            label for=(id) { (field.label) }
            @match field.widget {
                Widget::Text => {
                    input type="text" id=(id) name=(field.name) class=(css)
                        placeholder=(field.label) value=(field.value) required[field.required];
                }
                Widget::Textarea => {
                    textarea id=(id) name=(field.name) class=(css) rows="12"
                        placeholder=(field.label) required[field.required] { (field.value) }
                }
            }
            @if has_errors {
                ul.errorlist {
                    @for error in &field.errors {
                        li { (error) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(widget: Widget, required: bool, errors: Vec<String>) -> Field {
        Field {
            name: "title",
            label: "Title",
            required,
            widget,
            value: "<b>hi</b>".to_string(),
            errors,
        }
    }

    #[test]
    fn test_required_text_field() {
        let html = form_row(&field(Widget::Text, true, vec![]), "form-control").into_string();
        assert!(html.contains(r#"placeholder="Title""#));
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains("required"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("errorlist"));
    }

    #[test]
    fn test_optional_field_not_required() {
        let html = form_row(&field(Widget::Text, false, vec![]), "form-control").into_string();
        assert!(!html.contains("required"));
    }

    #[test]
    fn test_textarea_with_errors() {
        let html = form_row(
            &field(Widget::Textarea, true, vec!["This field is required.".to_string()]),
            "form-control",
        )
        .into_string();
        assert!(html.contains("<textarea"));
        assert!(html.contains("has-error"));
        assert!(html.contains("<li>This field is required.</li>"));
    }
}
