use archive_assets::templates;
use archive_models::locale::Locale;
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template in the most specific variant available for
    /// `locale`.
    ///
    /// Without a locale the configured default locale is used.
    fn render<T: Template + 'static>(
        &self,
        template: &T,
        locale: Option<Locale>,
    ) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        locale: Option<Locale>,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(
                mockall::predicate::eq(template),
                mockall::predicate::eq(locale),
            )
            .return_once(|_, _| Ok(result));
        self
    }

    pub fn with_render_error<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        locale: Option<Locale>,
        error: anyhow::Error,
    ) -> Self {
        self.expect_render()
            .once()
            .with(
                mockall::predicate::eq(template),
                mockall::predicate::eq(locale),
            )
            .return_once(|_, _| Err(error));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $name:literal, $template:expr ) { $( $locale:literal => $localized:expr ),* $(,)? } ),* $(,)? ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $name;
                const TEMPLATE: &'static str = $template;
            }
        )*

        /// All embedded templates as `(name, source)`, including the localized
        /// variants named `<name>_<locale>`.
        pub const TEMPLATES: &[(&str, &str)] = &[
            $(
                ($ident::NAME, $ident::TEMPLATE),
                $( (concat!($name, "_", $locale), $localized), )*
            )*
        ];
    };
}

templates! {
    ContactusTemplate("contactus", templates::CONTACTUS) {
        "de" => templates::CONTACTUS_DE,
    },
}

/// Positional arguments of the contact form email, addressed as `args.0` to
/// `args.9` in the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactusTemplate {
    pub args: [Option<String>; 10],
}
