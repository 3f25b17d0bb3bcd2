//! `{{var}}` placeholder rendering for generated resource names.
//!
//! Builtins are `timestamp`, `date` and `random_id`; `account_id` is only
//! resolved when a template asks for it, then cached for the renderer's
//! lifetime.

use crate::error::{AgentkitError, Result};
use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("valid placeholder regex"));

type AccountResolver<'a> = Box<dyn Fn() -> Result<String> + 'a>;

pub fn has_placeholders(s: &str) -> bool {
    PLACEHOLDER.is_match(s)
}

/// Names referenced by `template`, trimmed, in order of appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

#[derive(Default)]
pub struct TemplateRenderer<'a> {
    extra: BTreeMap<String, String>,
    account_resolver: Option<AccountResolver<'a>>,
    account_id: OnceCell<String>,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `{{account_id}}` through `resolver` (STS in production).
    pub fn with_account_resolver(mut self, resolver: impl Fn() -> Result<String> + 'a) -> Self {
        self.account_resolver = Some(Box::new(resolver));
        self
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.extra.insert(name.to_string(), value.to_string());
        self
    }

    fn account_id(&self) -> Result<&str> {
        self.account_id
            .get_or_try_init(|| {
                let resolver = self.account_resolver.as_ref().ok_or_else(|| {
                    AgentkitError::Template("{{account_id}} needs platform credentials".to_string())
                })?;
                let id = resolver()?;
                if id.trim().is_empty() {
                    return Err(AgentkitError::Template("account id resolved to an empty value".to_string()));
                }
                log::debug!("resolved account id for templates");
                Ok(id)
            })
            .map(String::as_str)
    }

    fn lookup(&self, name: &str) -> Result<Option<String>> {
        if let Some(value) = self.extra.get(name) {
            return Ok(Some(value.clone()));
        }
        let now = chrono::Local::now();
        Ok(match name {
            "timestamp" => Some(now.format("%Y%m%d%H%M%S").to_string()),
            "date" => Some(now.format("%Y%m%d").to_string()),
            "random_id" => Some(format!("{:08x}", rand::random::<u32>())),
            "account_id" => Some(self.account_id()?.to_string()),
            _ => None,
        })
    }

    /// Replace every placeholder; unknown names are an error listing them.
    pub fn render(&self, template: &str) -> Result<String> {
        if !template.contains("{{") {
            return Ok(template.to_string());
        }

        let mut values = BTreeMap::new();
        let mut unknown = Vec::new();
        for name in placeholders(template) {
            if values.contains_key(&name) || unknown.contains(&name) {
                continue;
            }
            match self.lookup(&name)? {
                Some(value) => {
                    values.insert(name, value);
                }
                None => unknown.push(name),
            }
        }

        if !unknown.is_empty() {
            return Err(AgentkitError::Template(format!(
                "unknown variable(s) in '{}': {}",
                template,
                unknown.join(", ")
            )));
        }

        Ok(PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                values.get(caps[1].trim()).cloned().unwrap_or_default()
            })
            .into_owned())
    }

    /// Like [`render`](Self::render) but returns `fallback` on failure.
    pub fn render_or(&self, template: &str, fallback: &str) -> String {
        match self.render(template) {
            Ok(rendered) => rendered,
            Err(e) => {
                log::warn!("template rendering failed, using fallback: {}", e);
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_plain_string_untouched() {
        assert_eq!(TemplateRenderer::new().render("agentkit").unwrap(), "agentkit");
    }

    #[test]
    fn test_builtins() {
        let renderer = TemplateRenderer::new();
        let ts = renderer.render("{{timestamp}}").unwrap();
        assert_eq!(ts.len(), 14);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));

        let date = renderer.render("build-{{ date }}").unwrap();
        assert_eq!(date.len(), "build-".len() + 8);

        let id = renderer.render("{{random_id}}").unwrap();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_account_id_resolved_once() {
        let calls = Cell::new(0);
        let renderer = TemplateRenderer::new().with_account_resolver(|| {
            calls.set(calls.get() + 1);
            Ok("2100012345".to_string())
        });

        assert_eq!(
            renderer.render("agentkit-platform-{{account_id}}").unwrap(),
            "agentkit-platform-2100012345"
        );
        assert_eq!(renderer.render("{{account_id}}/{{account_id}}").unwrap(), "2100012345/2100012345");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_account_id_not_resolved_when_unused() {
        let renderer = TemplateRenderer::new()
            .with_account_resolver(|| Err(AgentkitError::Credentials("none".to_string())));
        assert!(renderer.render("{{date}}").is_ok());
        assert!(renderer.render("{{account_id}}").is_err());
    }

    #[test]
    fn test_unknown_variable() {
        let err = TemplateRenderer::new().render("x-{{nope}}-{{other}}").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("nope"));
        assert!(msg.contains("other"));
    }

    #[test]
    fn test_extra_vars_and_fallback() {
        let renderer = TemplateRenderer::new().with_var("agent", "demo");
        assert_eq!(renderer.render("{{agent}}-svc").unwrap(), "demo-svc");
        assert_eq!(renderer.render_or("{{account_id}}", "fallback"), "fallback");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders("a{{ x }}b{{y}}"), vec!["x", "y"]);
        assert!(has_placeholders("{{timestamp}}"));
        assert!(!has_placeholders("latest"));
    }
}
