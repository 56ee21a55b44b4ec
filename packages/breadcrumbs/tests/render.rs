use breadcrumbs::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn books_trail() -> Trail {
    let mut trail = Trail::new(ControllerPath::new("books"));
    trail.add_breadcrumb("Home", "/");
    trail.add_breadcrumb("Books", "/books");
    trail.add_breadcrumb("Mystery", Path::Absent);
    trail
}

fn render(cx: &dyn RenderContext, trail: &Trail, config: &BreadcrumbsConfig) -> String {
    render_breadcrumbs(cx, trail, config).unwrap().into_string()
}

#[test]
fn default_config() {
    let cx = MemoryContext::new();
    assert_eq!(
        render(&cx, &books_trail(), &BreadcrumbsConfig::default()),
        r#"<a href="/">Home</a> » <a href="/books">Books</a> » Mystery"#
    );
}

#[test]
fn list_items_in_a_wrapper() {
    let cx = MemoryContext::new();
    let config = BreadcrumbsConfig::default().tag("li").wrapper("ul");
    assert_eq!(
        render(&cx, &books_trail(), &config),
        r#"<ul><li><a href="/">Home</a></li> » <li><a href="/books">Books</a></li> » <li>Mystery</li></ul>"#
    );
}

#[test]
fn separator_count() {
    let cx = MemoryContext::new();
    let config = BreadcrumbsConfig::default().separator(" | ");

    let mut trail = Trail::new(ControllerPath::new("pages"));
    for n in 1..=6 {
        trail.add_breadcrumb(format!("Page {n}"), format!("/pages/{n}"));
        let html = render(&cx, &trail, &config);
        assert_eq!(html.matches(" | ").count(), n - 1, "{html}");
    }
}

#[test]
fn last_breadcrumb_is_never_linked() {
    let cx = MemoryContext::new();
    let mut trail = Trail::new(ControllerPath::new("books"));
    trail.add_breadcrumb("Home", "/");
    trail.add_breadcrumb("Books", "/books");

    assert_eq!(
        render(&cx, &trail, &BreadcrumbsConfig::default()),
        r#"<a href="/">Home</a> » Books"#
    );
}

#[test]
fn last_is_positional() {
    let cx = MemoryContext::new();
    let mut trail = Trail::new(ControllerPath::new("books"));
    trail.add_breadcrumb("Books", "/books");
    trail.add_breadcrumb("Books", "/books");

    assert_eq!(
        render(&cx, &trail, &BreadcrumbsConfig::default()),
        r#"<a href="/books">Books</a> » Books"#
    );
}

#[test]
fn unresolved_paths_are_not_linked() {
    let cx = MemoryContext::new().with_accessor("current_author_path", || None);
    let mut trail = Trail::new(ControllerPath::new("books"));
    trail.add_breadcrumb("Home", Path::Absent);
    trail.add_breadcrumb("Author", Path::accessor("current_author_path"));
    trail.add_breadcrumb("Series", Path::dynamic(|_| Ok(None)));
    trail.add_breadcrumb("Book", "/books/1");

    assert_eq!(
        render(&cx, &trail, &BreadcrumbsConfig::default()),
        "Home » Author » Series » Book"
    );
}

#[test]
fn link_fidelity() {
    let cx = MemoryContext::new()
        .with_translation("breadcrumbs.admin/users.dashboard", "Dashboard")
        .with_translation("breadcrumbs.admin/users.user", "User %{name}")
        .with_accessor("admin_root_path", || Some("/admin".to_string()));

    let mut trail = Trail::new(ControllerPath::new("admin/users"));
    trail.add_breadcrumb(Label::key("dashboard"), Path::accessor("admin_root_path"));
    trail.add_breadcrumb(
        Label::key_with("user", [("name", "ada")]),
        RouteParams::new().with("controller", "admin/users").with("id", 12),
    );
    trail.add_breadcrumb(
        Label::dynamic(|controller| Label::text(format!("Edit in {}", controller.controller_path()))),
        Path::dynamic(|_| Ok(Some("/admin/users/12/edit".to_string()))),
    );
    trail.add_breadcrumb("Done", Path::Absent);

    assert_eq!(
        render(&cx, &trail, &BreadcrumbsConfig::default()),
        concat!(
            r#"<a href="/admin">Dashboard</a> » "#,
            r#"<a href="/admin/users/12">User ada</a> » "#,
            r#"<a href="/admin/users/12/edit">Edit in admin/users</a> » "#,
            "Done"
        )
    );
}

#[test]
fn lookup_scope_follows_the_owner() {
    let cx = MemoryContext::new().with_translation("breadcrumbs.admin/users.dashboard", "Dashboard");
    let mut trail = Trail::new(ControllerPath::new("admin/users"));
    trail.add_breadcrumb(Label::key("dashboard"), Path::Absent);

    render(&cx, &trail, &BreadcrumbsConfig::default());

    assert_eq!(
        cx.lookups(),
        vec![("breadcrumbs.admin/users".to_string(), "dashboard".to_string())]
    );
}

#[test]
fn rendering_twice_is_identical() {
    let cx = MemoryContext::new();
    let trail = books_trail();
    let config = BreadcrumbsConfig::default().wrapper("nav");

    let first = render(&cx, &trail, &config);
    let second = render(&cx, &trail, &config);

    assert_eq!(first, second);
    assert_eq!(first.matches("<nav>").count(), 1);
    assert!(first.starts_with("<nav>") && first.ends_with("</nav>"));
}

#[test]
fn empty_trail() {
    let cx = MemoryContext::new();
    let trail = Trail::new(ControllerPath::new("books"));

    assert_eq!(render(&cx, &trail, &BreadcrumbsConfig::default()), "");
    assert_eq!(
        render(&cx, &trail, &BreadcrumbsConfig::default().wrapper("ol").tag("li")),
        "<ol></ol>"
    );
}

#[test]
fn numeric_label_fails_before_rendering() {
    let cx = MemoryContext::new();
    let mut trail = Trail::new(ControllerPath::new("books"));

    let result = trail
        .extend_from_value(&json!([{ "label": "Home", "path": "/" }, { "label": 7, "path": null }]))
        .and_then(|()| {
            render_breadcrumbs_with(&cx, &trail, &BreadcrumbsConfig::default(), |m| m)
        });

    assert!(matches!(result, Err(BreadcrumbError::UnsupportedLabelType(_))));
    assert_eq!(cx.output(), "");
}

#[test]
fn missing_translation_fails_the_render() {
    let cx = MemoryContext::new();
    let mut trail = Trail::new(ControllerPath::new("books"));
    trail.add_breadcrumb("Home", "/");
    trail.add_breadcrumb(Label::key("index"), Path::Absent);

    let err = render_breadcrumbs_with(&cx, &trail, &BreadcrumbsConfig::default(), |m| m)
        .unwrap_err();

    assert_eq!(err.to_string(), "translation missing: breadcrumbs.books.index");
    assert_eq!(cx.output(), "");
}

#[test]
fn dynamic_path_failure_fails_the_render() {
    let cx = MemoryContext::new();
    let mut trail = Trail::new(ControllerPath::new("books"));
    trail.add_breadcrumb(
        "Home",
        Path::dynamic(|cx| cx.url_for(&RouteParams::new().with("id", 1)).map(Some)),
    );
    trail.add_breadcrumb("Books", Path::Absent);

    let err = render_breadcrumbs(&cx, &trail, &BreadcrumbsConfig::default()).unwrap_err();

    assert!(matches!(err, BreadcrumbError::Host(_)));
    assert!(err.to_string().starts_with("no route matches"));
}

#[test]
fn dynamic_path_can_use_the_host() {
    let cx = MemoryContext::new().with_accessor("root_path", || Some("/".to_string()));
    let mut trail = Trail::new(ControllerPath::new("books"));
    trail.add_breadcrumb("Home", Path::dynamic(|cx| cx.call_accessor("root_path")));
    trail.add_breadcrumb(
        "Books",
        Path::dynamic(|cx| cx.url_for(&RouteParams::new().with("controller", "books")).map(Some)),
    );
    trail.add_breadcrumb("Dune", Path::Absent);

    assert_eq!(
        render(&cx, &trail, &BreadcrumbsConfig::default()),
        r#"<a href="/">Home</a> » <a href="/books">Books</a> » Dune"#
    );
}

#[test]
fn block_rendering_appends_to_output() {
    let cx = MemoryContext::new();
    cx.concat(Markup::from_trusted("<header>"));

    render_breadcrumbs_with(
        &cx,
        &books_trail(),
        &BreadcrumbsConfig::default().separator(" / "),
        |crumbs| Markup::from_trusted(format!("<p>{crumbs}</p>")),
    )
    .unwrap();

    assert_eq!(
        cx.output(),
        r#"<header><p><a href="/">Home</a> / <a href="/books">Books</a> / Mystery</p>"#
    );
}

/// Renders the trail as a schema.org `BreadcrumbList`, reusing the label and path resolution.
struct JsonLdBuilder;

impl Builder for JsonLdBuilder {
    fn render(
        &self,
        cx: &dyn RenderContext,
        elements: &[Element],
        _config: &BreadcrumbsConfig,
    ) -> breadcrumbs::Result<Markup> {
        let mut items = Vec::new();
        for (idx, element) in elements.iter().enumerate() {
            let name = self.compute_name(cx, &element.label, element.owner.as_ref())?;
            let mut item = json!({ "@type": "ListItem", "position": idx + 1, "name": name });
            if let Some(url) = self.compute_path(cx, &element.path)? {
                item["item"] = json!(url);
            }
            items.push(item);
        }

        let list = json!({ "@type": "BreadcrumbList", "itemListElement": items });
        Ok(Markup::from_trusted(list.to_string()))
    }
}

#[test]
fn injected_builder_replaces_the_default() {
    let cx = MemoryContext::new();
    let config = BreadcrumbsConfig::default().builder(JsonLdBuilder);

    let html = render(&cx, &books_trail(), &config);
    let value: serde_json::Value = serde_json::from_str(&html).unwrap();

    assert_eq!(value["@type"], "BreadcrumbList");
    assert_eq!(value["itemListElement"][0]["item"], "/");
    assert_eq!(value["itemListElement"][2]["name"], "Mystery");
    assert!(value["itemListElement"][2].get("item").is_none());
}

#[test]
fn builder_without_render_is_not_implemented() {
    struct Placeholder;
    impl Builder for Placeholder {}

    let cx = MemoryContext::new();
    let config = BreadcrumbsConfig::default().builder(Placeholder);

    assert!(matches!(
        render_breadcrumbs(&cx, &books_trail(), &config),
        Err(BreadcrumbError::NotImplemented)
    ));
}

/// A host with its own link markup.
struct ClassedLinks(MemoryContext);

impl RenderContext for ClassedLinks {
    fn translate(&self, key: &str, scope: &LookupScope, params: &Params) -> Result<String, HostError> {
        self.0.translate(key, scope, params)
    }

    fn url_for(&self, route: &RouteParams) -> Result<String, HostError> {
        self.0.url_for(route)
    }

    fn call_accessor(&self, name: &str) -> Result<Option<String>, HostError> {
        self.0.call_accessor(name)
    }

    fn concat(&self, fragment: Markup) {
        self.0.concat(fragment)
    }

    fn link_to(&self, text: &str, url: &str) -> Markup {
        Markup::element("a", &[("class", "crumb"), ("href", url)], &self.text(text))
    }
}

#[test]
fn host_controls_link_markup() {
    let cx = ClassedLinks(MemoryContext::new());
    assert_eq!(
        render(&cx, &books_trail(), &BreadcrumbsConfig::default().separator(" ")),
        r#"<a class="crumb" href="/">Home</a> <a class="crumb" href="/books">Books</a> Mystery"#
    );
}
