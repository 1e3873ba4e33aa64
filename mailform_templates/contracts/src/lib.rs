use serde::Serialize;

pub use self::strings::Strings;

mod strings;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    /// Name of the template. Names ending in `.html` are autoescaped.
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    PageTemplate("page.html"),
    FormTemplate("form.html"),
    PreviewTemplate("preview.html"),
    NotificationTemplate("notification.html"),
}

/// Complete HTML document wrapping one rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTemplate {
    pub lang: &'static str,
    pub title: &'static str,
    /// Rendered fragment, inserted without escaping
    pub content: String,
}

/// Blank input form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormTemplate {
    pub strings: &'static Strings,
    pub action: String,
    pub greeting: String,
    pub show_placeholders: bool,
    pub textarea_rows: u32,
}

/// Preview of a submitted message, carrying the values to confirm in hidden
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewTemplate {
    pub strings: &'static Strings,
    pub action: String,
    pub from: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub digest: String,
    pub content_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationTemplate {
    pub status: NotificationStatus,
    pub message: &'static str,
    /// Technical detail, only shown in debug mode
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Failure,
}
