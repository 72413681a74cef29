// Form validation for the admin pages
//
// Every field is deserialized as optional. Validation reports missing and
// over-long values per field and only produces the cleaned output when the
// whole form is valid, so callers never see a partially valid submission.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{Article, Blog};

// =============================================================================
// Field Limits
// =============================================================================

/// Maximum length of article and blog titles, in characters.
pub const MAX_TITLE_CHARS: usize = 255;

/// Maximum length of the blog tagline, in characters.
pub const MAX_TAGLINE_CHARS: usize = 255;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

// =============================================================================
// Errors
// =============================================================================

/// Field-level validation errors, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FormErrors(BTreeMap<&'static str, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Errors reported for one field (empty when the field is valid)
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Names of the invalid fields, in name order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

// =============================================================================
// Rendering metadata
// =============================================================================

/// Input control used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Text,
    Textarea,
}

/// A form field ready to be rendered: its submitted (or stored) value plus any
/// errors attached to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub widget: Widget,
    pub value: String,
    pub errors: Vec<String>,
}

impl Field {
    fn new(
        name: &'static str,
        label: &'static str,
        required: bool,
        widget: Widget,
        value: Option<&str>,
        errors: &FormErrors,
    ) -> Self {
        Self {
            name,
            label,
            required,
            widget,
            value: value.unwrap_or_default().to_string(),
            errors: errors.get(name).to_vec(),
        }
    }
}

/// A form bound to a model: validates into a cleaned value and describes its
/// fields for rendering
pub trait ModelForm {
    type Output;

    fn validate(&self) -> Result<Self::Output, FormErrors>;

    fn fields(&self, errors: &FormErrors) -> Vec<Field>;
}

// =============================================================================
// Blog settings
// =============================================================================

/// Submitted blog settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogForm {
    pub title: Option<String>,
    pub tagline: Option<String>,
}

/// Validated blog settings. A blank tagline is stored as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSettings {
    pub title: String,
    pub tagline: Option<String>,
}

impl From<&Blog> for BlogForm {
    fn from(blog: &Blog) -> Self {
        Self {
            title: Some(blog.title.clone()),
            tagline: blog.tagline.clone(),
        }
    }
}

impl ModelForm for BlogForm {
    type Output = BlogSettings;

    fn validate(&self) -> Result<BlogSettings, FormErrors> {
        let mut errors = FormErrors::new();
        let title = required_text(&mut errors, "title", self.title.as_deref(), MAX_TITLE_CHARS);
        let tagline = optional_text(
            &mut errors,
            "tagline",
            self.tagline.as_deref(),
            MAX_TAGLINE_CHARS,
        );

        match title {
            Some(title) if errors.is_empty() => Ok(BlogSettings { title, tagline }),
            _ => Err(errors),
        }
    }

    fn fields(&self, errors: &FormErrors) -> Vec<Field> {
        vec![
            Field::new("title", "Title", true, Widget::Text, self.title.as_deref(), errors),
            Field::new(
                "tagline",
                "Tagline",
                false,
                Widget::Text,
                self.tagline.as_deref(),
                errors,
            ),
        ]
    }
}

// =============================================================================
// Articles
// =============================================================================

/// Submitted article
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleForm {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Validated article content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub body: String,
}

impl From<&Article> for ArticleForm {
    fn from(article: &Article) -> Self {
        Self {
            title: Some(article.title.clone()),
            body: Some(article.body.clone()),
        }
    }
}

impl ModelForm for ArticleForm {
    type Output = ArticleDraft;

    fn validate(&self) -> Result<ArticleDraft, FormErrors> {
        let mut errors = FormErrors::new();
        let title = required_text(&mut errors, "title", self.title.as_deref(), MAX_TITLE_CHARS);
        let body = required_text(&mut errors, "body", self.body.as_deref(), usize::MAX);

        match (title, body) {
            (Some(title), Some(body)) if errors.is_empty() => Ok(ArticleDraft { title, body }),
            _ => Err(errors),
        }
    }

    fn fields(&self, errors: &FormErrors) -> Vec<Field> {
        vec![
            Field::new("title", "Title", true, Widget::Text, self.title.as_deref(), errors),
            Field::new("body", "Body", true, Widget::Textarea, self.body.as_deref(), errors),
        ]
    }
}

// =============================================================================
// Cleaning helpers
// =============================================================================

fn required_text(
    errors: &mut FormErrors,
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> Option<String> {
    match optional_text(errors, field, value, max_chars) {
        Some(value) => Some(value),
        None if errors.get(field).is_empty() => {
            errors.add(field, REQUIRED_MESSAGE);
            None
        }
        None => None,
    }
}

fn optional_text(
    errors: &mut FormErrors,
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    let chars = value.chars().count();
    if chars > max_chars {
        errors.add(
            field,
            format!("Ensure this value has at most {max_chars} characters (it has {chars})."),
        );
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_form(title: Option<&str>, tagline: Option<&str>) -> BlogForm {
        BlogForm {
            title: title.map(String::from),
            tagline: tagline.map(String::from),
        }
    }

    fn article_form(title: Option<&str>, body: Option<&str>) -> ArticleForm {
        ArticleForm {
            title: title.map(String::from),
            body: body.map(String::from),
        }
    }

    #[test]
    fn test_blog_form_valid() {
        let settings = blog_form(Some("new_blog_title"), Some("new_tagline"))
            .validate()
            .unwrap();
        assert_eq!(settings.title, "new_blog_title");
        assert_eq!(settings.tagline.as_deref(), Some("new_tagline"));
    }

    #[test]
    fn test_blog_form_missing_title() {
        let errors = blog_form(None, Some("new_tagline")).validate().unwrap_err();
        assert_eq!(errors.get("title"), [REQUIRED_MESSAGE.to_string()]);
        assert!(errors.get("tagline").is_empty());
    }

    #[test]
    fn test_blog_form_blank_title() {
        let errors = blog_form(Some("   "), None).validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), [REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_blog_form_blank_tagline_is_absent() {
        let settings = blog_form(Some("Title"), Some("  ")).validate().unwrap();
        assert_eq!(settings.tagline, None);

        let settings = blog_form(Some("Title"), None).validate().unwrap();
        assert_eq!(settings.tagline, None);
    }

    #[test]
    fn test_blog_form_trims_values() {
        let settings = blog_form(Some("  Title "), Some(" tag ")).validate().unwrap();
        assert_eq!(settings.title, "Title");
        assert_eq!(settings.tagline.as_deref(), Some("tag"));
    }

    #[test]
    fn test_blog_form_tagline_too_long() {
        let long = "x".repeat(MAX_TAGLINE_CHARS + 1);
        let errors = blog_form(Some("Title"), Some(&long)).validate().unwrap_err();
        assert_eq!(
            errors.get("tagline"),
            ["Ensure this value has at most 255 characters (it has 256).".to_string()]
        );
    }

    #[test]
    fn test_title_limit_counts_characters() {
        let title = "é".repeat(MAX_TITLE_CHARS);
        assert!(blog_form(Some(&title), None).validate().is_ok());
    }

    #[test]
    fn test_article_form_valid() {
        let draft = article_form(Some("A"), Some("B")).validate().unwrap();
        assert_eq!(
            draft,
            ArticleDraft {
                title: "A".to_string(),
                body: "B".to_string()
            }
        );
    }

    #[test]
    fn test_article_form_missing_body() {
        let errors = article_form(Some("new_title"), None).validate().unwrap_err();
        assert!(errors.get("title").is_empty());
        assert_eq!(errors.get("body"), [REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_article_form_missing_everything() {
        let errors = article_form(None, None).validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["body", "title"]);
    }

    #[test]
    fn test_article_form_long_title_reports_length_only() {
        let long = "t".repeat(300);
        let errors = article_form(Some(&long), Some("body")).validate().unwrap_err();
        assert_eq!(
            errors.get("title"),
            ["Ensure this value has at most 255 characters (it has 300).".to_string()]
        );
    }

    #[test]
    fn test_fields_carry_values_and_errors() {
        let form = article_form(Some("title123"), None);
        let errors = form.validate().unwrap_err();
        let fields = form.fields(&errors);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "title");
        assert_eq!(fields[0].value, "title123");
        assert!(fields[0].errors.is_empty());
        assert_eq!(fields[1].widget, Widget::Textarea);
        assert_eq!(fields[1].value, "");
        assert_eq!(fields[1].errors, vec![REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_blog_form_prefill() {
        let blog = Blog {
            title: "T".to_string(),
            tagline: None,
        };
        let fields = BlogForm::from(&blog).fields(&FormErrors::new());
        assert_eq!(fields[0].value, "T");
        assert!(fields[0].required);
        assert_eq!(fields[1].value, "");
        assert!(!fields[1].required);
    }

    #[test]
    fn test_form_deserializes_partial_submission() {
        let form: BlogForm = serde_json::from_str(r#"{"tagline":"new_tagline"}"#).unwrap();
        assert!(form.title.is_none());
        assert_eq!(form.tagline.as_deref(), Some("new_tagline"));
    }
}
