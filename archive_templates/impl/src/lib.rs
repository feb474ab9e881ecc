use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context};
use archive_di::Build;
use archive_models::locale::Locale;
use archive_templates_contracts::{Template, TemplateService, TEMPLATES};
use archive_utils::trace_instrument;
use tera::Tera;
use tracing::trace;

#[derive(Debug, Clone, Build)]
pub struct TemplateServiceImpl {
    config: TemplateServiceConfig,
    #[state]
    state: State,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceConfig {
    /// Directory whose files take precedence over the embedded templates.
    pub dir: Option<PathBuf>,
    pub default_locale: Option<Locale>,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    #[trace_instrument(skip(self, template))]
    fn render<T: Template + 'static>(
        &self,
        template: &T,
        locale: Option<Locale>,
    ) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;

        for candidate in self.candidates(T::NAME, locale.as_ref()) {
            if let Some(dir) = &self.config.dir {
                let path = dir.join(&candidate);
                if path.is_file() {
                    trace!(path = %path.display(), "using template file");
                    let source = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read template {}", path.display()))?;
                    return Tera::one_off(&source, &context, false)
                        .with_context(|| format!("Failed to render template {}", path.display()));
                }
            }

            if self.state.0.get_template_names().any(|name| name == candidate) {
                trace!(candidate, "using embedded template");
                return self
                    .state
                    .0
                    .render(&candidate, &context)
                    .with_context(|| format!("Failed to render template {candidate}"));
            }
        }

        Err(anyhow!("Template {} not found", T::NAME))
    }
}

impl TemplateServiceImpl {
    fn candidates(&self, name: &str, locale: Option<&Locale>) -> Vec<String> {
        locale
            .or(self.config.default_locale.as_ref())
            .into_iter()
            .flat_map(Locale::fallbacks)
            .map(|locale| format!("{name}_{locale}"))
            .chain([name.to_owned()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use archive_templates_contracts::ContactusTemplate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn template() -> ContactusTemplate {
        ContactusTemplate {
            args: [
                Some("Thu, 14 Mar 2024 15:09:26 +0000".into()),
                Some("a@b.com".into()),
                Some("Ann".into()),
                Some("user".into()),
                Some("item 123".into()),
                None,
                Some("/browse".into()),
                None,
                Some("abc".into()),
                Some("Please help".into()),
            ],
        }
    }

    fn locale(s: &str) -> Option<Locale> {
        Some(Locale::try_new(s.to_owned()).unwrap())
    }

    fn sut(config: TemplateServiceConfig) -> TemplateServiceImpl {
        TemplateServiceImpl {
            config,
            state: Default::default(),
        }
    }

    #[test]
    fn embedded_templates_render() {
        let sut = sut(Default::default());
        for loc in [None, locale("de")] {
            let result = sut.render(&template(), loc).unwrap();
            assert!(result.contains("a@b.com"));
            assert!(result.contains("Please help"));
            assert!(!result.contains("args."));
        }
    }

    #[test]
    fn default_template() {
        // Arrange
        let sut = sut(Default::default());

        // Act
        let result = sut.render(&template(), None).unwrap();

        // Assert
        assert!(result.trim_start().starts_with("Subject: Contact Form Information\n"));
        assert!(result.contains("Logged in as: anonymous\n"));
    }

    #[test]
    fn localized_template() {
        // Arrange
        let sut = sut(Default::default());

        // Act
        let de = sut.render(&template(), locale("de_AT")).unwrap();
        let en = sut.render(&template(), None).unwrap();

        // Assert
        assert_ne!(de, en);
    }

    #[test]
    fn unknown_locale_falls_back_to_default_template() {
        // Arrange
        let sut = sut(Default::default());

        // Act
        let fr = sut.render(&template(), locale("fr_FR")).unwrap();
        let en = sut.render(&template(), None).unwrap();

        // Assert
        assert_eq!(fr, en);
    }

    #[test]
    fn default_locale() {
        // Arrange
        let sut_de = sut(TemplateServiceConfig {
            dir: None,
            default_locale: locale("de"),
        });
        let sut_en = sut(Default::default());

        // Act
        let default = sut_de.render(&template(), None).unwrap();
        let de = sut_en.render(&template(), locale("de")).unwrap();

        // Assert
        assert_eq!(default, de);
    }

    #[test]
    fn candidates() {
        let sut = sut(Default::default());
        assert_eq!(
            sut.candidates("contactus", locale("pt_BR").as_ref()),
            ["contactus_pt_BR", "contactus_pt", "contactus"]
        );
        assert_eq!(sut.candidates("contactus", None), ["contactus"]);
    }

    #[test]
    fn template_dir_override() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("contactus_pt"), "Ola {{ args.2 }}").unwrap();
        std::fs::write(dir.path().join("contactus"), "Hello {{ args.2 }}").unwrap();
        let sut = sut(TemplateServiceConfig {
            dir: Some(dir.path().into()),
            default_locale: None,
        });

        // Act
        let pt = sut.render(&template(), locale("pt_BR")).unwrap();
        let en = sut.render(&template(), None).unwrap();
        let de = sut.render(&template(), locale("de")).unwrap();

        // Assert
        assert_eq!(pt, "Ola Ann");
        assert_eq!(en, "Hello Ann");
        assert!(de.contains("a@b.com"));
        assert_ne!(de, en);
    }

    #[test]
    fn broken_template_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("contactus"), "{{ args.2 ").unwrap();
        let sut = sut(TemplateServiceConfig {
            dir: Some(dir.path().into()),
            default_locale: None,
        });

        // Act
        let result = sut.render(&template(), None);

        // Assert
        assert!(result.is_err());
    }
}
