use crate::config::Command;
use crate::table::CommandTable;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use handlebars::{Handlebars, RenderError, TemplateError, handlebars_helper};
use hyper::body::Bytes;
use serde::Serialize;

pub const ICON_PATH: &str = "/icon.png";

const BUILTIN_ICON: &[u8] = include_bytes!("icon.png");

const LISTING: &str = "listing";
const OPENSEARCH: &str = "opensearch";

handlebars_helper!(join: |items: array, sep: str| items
    .iter()
    .filter_map(|item| item.as_str())
    .collect::<Vec<_>>()
    .join(sep));

/// Everything served besides redirects: the command listing, the search provider
/// description, and the icon both of them point to.
pub struct Directory {
    templates: Handlebars<'static>,
    icon: Bytes,
    icon_base64: String,
    maintainers: Vec<String>,
    base_url: String,
}

#[derive(Serialize)]
struct Listing<'a> {
    commands: Vec<&'a Command>,
    default: Option<&'a str>,
    maintainers: &'a [String],
    icon: &'a str,
}

#[derive(Serialize)]
struct OpenSearch<'a> {
    base_url: &'a str,
    icon_path: &'a str,
}

impl Directory {
    pub fn new(
        icon: Option<Vec<u8>>,
        maintainers: Vec<String>,
        base_url: String,
    ) -> Result<Self, TemplateError> {
        let mut templates = Handlebars::new();
        templates.register_helper("join", Box::new(join));
        templates.register_template_string(LISTING, include_str!("templates/directory.html.hbs"))?;
        templates
            .register_template_string(OPENSEARCH, include_str!("templates/opensearch.xml.hbs"))?;

        let icon = match icon {
            Some(icon) => Bytes::from(icon),
            None => Bytes::from_static(BUILTIN_ICON),
        };
        let icon_base64 = STANDARD.encode(&icon);

        Ok(Self {
            templates,
            icon,
            icon_base64,
            maintainers,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn render_listing(&self, table: &CommandTable) -> Result<String, RenderError> {
        self.templates.render(
            LISTING,
            &Listing {
                commands: table.sorted().collect(),
                default: table.default_command().map(|c| c.name.as_str()),
                maintainers: &self.maintainers,
                icon: &self.icon_base64,
            },
        )
    }

    pub fn render_opensearch(&self) -> Result<String, RenderError> {
        self.templates.render(
            OPENSEARCH,
            &OpenSearch {
                base_url: &self.base_url,
                icon_path: ICON_PATH,
            },
        )
    }

    pub fn icon(&self) -> Bytes {
        self.icon.clone()
    }
}

#[cfg(test)]
impl Directory {
    /// Same assets, but both pages fail to render.
    pub(crate) fn failing() -> Self {
        let mut directory = Self::new(None, Vec::new(), String::new()).unwrap();
        directory.templates.set_strict_mode(true);
        for name in [LISTING, OPENSEARCH] {
            directory
                .templates
                .register_template_string(name, "{{no_such_field}}")
                .unwrap();
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::command;

    fn table() -> CommandTable {
        CommandTable::build(vec![
            Command {
                description: "Search with <DuckDuckGo>".to_string(),
                is_default: true,
                ..command("ddg", &["d", "duck"], "https://duckduckgo.com", "https://duckduckgo.com/?q=%s")
            },
            Command {
                usage: "g <terms>".to_string(),
                ..command("g", &[], "https://google.com/search?q=", "https://google.com/search?q=%s")
            },
            command("a", &[], "https://a.example", ""),
        ])
        .unwrap()
    }

    fn directory() -> Directory {
        Directory::new(
            None,
            vec!["alice".to_string(), "bob".to_string()],
            "https://lol.example/".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn listing_contains_commands_in_name_order() {
        let html = directory().render_listing(&table()).unwrap();
        let a = html.find("<td><code>a</code>").unwrap();
        let ddg = html.find("<td><code>ddg</code>").unwrap();
        let g = html.find("<td><code>g</code>").unwrap();
        assert!(a < ddg && ddg < g, "{}", html);
        assert!(html.contains("d, duck"));
        assert!(html.contains("(default)"));
        assert!(html.contains("alice, bob"));
    }

    #[test]
    fn listing_escapes_config_text() {
        let html = directory().render_listing(&table()).unwrap();
        assert!(html.contains("Search with &lt;DuckDuckGo&gt;"));
        assert!(html.contains("g &lt;terms&gt;"));
        assert!(!html.contains("<DuckDuckGo>"));
    }

    #[test]
    fn listing_inlines_icon() {
        let html = directory().render_listing(&table()).unwrap();
        assert!(html.contains(&format!("data:image/png;base64,{}", STANDARD.encode(BUILTIN_ICON))));
    }

    #[test]
    fn listing_without_maintainers() {
        let html = Directory::new(None, vec![], String::new())
            .unwrap()
            .render_listing(&table())
            .unwrap();
        assert!(!html.contains("Maintained by"));
    }

    #[test]
    fn opensearch_points_at_base_url() {
        let xml = directory().render_opensearch().unwrap();
        assert!(xml.contains("<ShortName>LOL</ShortName>"));
        assert!(xml.contains(r#"template="https://lol.example/?q={searchTerms}""#), "{}", xml);
        assert!(xml.contains(">https://lol.example/icon.png</Image>"), "{}", xml);
    }

    #[test]
    fn render_errors_are_returned() {
        let directory = Directory::failing();
        assert!(directory.render_listing(&table()).is_err());
        assert!(directory.render_opensearch().is_err());
        assert_eq!(&directory.icon()[..], BUILTIN_ICON);
    }

    #[test]
    fn custom_icon() {
        let custom = Directory::new(Some(vec![1, 2, 3]), vec![], String::new()).unwrap();
        assert_eq!(&custom.icon()[..], [1, 2, 3]);
        assert_eq!(&directory().icon()[..], BUILTIN_ICON);
    }
}
