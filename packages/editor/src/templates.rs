//! # Template Registry
//!
//! Named starter documents a user can begin from.
//!
//! Registry snapshots are frozen: [`crate::Editor::load_template`] clones
//! the catalog copy into the document, so later edits never leak back into
//! the registry. The built-in catalog ships the three stock starters of
//! the builder UI (blank canvas, landing page, blog).

use serde::{Deserialize, Serialize};

use maquette_document::{Node, NodeKind, Snapshot};

/// A named, immutable starter document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Asset name for the template picker. Opaque to the engine.
    pub thumbnail: String,
    snapshot: Snapshot,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
        snapshot: Snapshot,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
            snapshot,
        }
    }

    /// The starter tree. Callers clone it; the registry copy stays as it
    /// is.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Fixed catalog of templates, established at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The stock catalog: Blank Canvas, Landing Page and Blog.
    pub fn builtin() -> Self {
        Self::new(vec![blank_canvas(), landing_page(), blog()])
    }

    pub fn get(&self, template_id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn page_root() -> Node {
    Node::new("root", NodeKind::Container)
        .with_style("padding", "20px")
        .with_style("minHeight", "100vh")
}

fn nav_link(id: &str, parent: &str, rank: i32, label: &str) -> Node {
    Node::new(id, NodeKind::Text)
        .with_parent(parent)
        .with_order(rank)
        .with_content(label)
        .with_style("cursor", "pointer")
}

fn blank_canvas() -> Template {
    Template::new(
        "blank",
        "Blank Canvas",
        "blank-template.png",
        Snapshot::from_nodes(vec![page_root()]),
    )
}

/// A feature card and its two text children for the landing page grid.
fn feature_card(id: &str, rank: i32, title: &str, blurb: &str) -> Vec<Node> {
    vec![
        Node::new(id, NodeKind::Container)
            .with_parent("features")
            .with_order(rank)
            .with_children([format!("{id}-title"), format!("{id}-desc")])
            .with_style("padding", "20px")
            .with_style("backgroundColor", "white")
            .with_style("borderRadius", "8px")
            .with_style("boxShadow", "0 2px 4px rgba(0,0,0,0.1)"),
        Node::new(format!("{id}-title"), NodeKind::Text)
            .with_parent(id)
            .with_content(title)
            .with_style("fontSize", "20px")
            .with_style("fontWeight", "bold")
            .with_style("marginBottom", "10px"),
        Node::new(format!("{id}-desc"), NodeKind::Text)
            .with_parent(id)
            .with_order(1)
            .with_content(blurb)
            .with_style("color", "#6B7280"),
    ]
}

fn landing_page() -> Template {
    let mut nodes = vec![
        page_root().with_children(["header", "hero", "features"]),
        Node::new("header", NodeKind::Container)
            .with_parent("root")
            .with_children(["logo", "nav"])
            .with_style("display", "flex")
            .with_style("justifyContent", "space-between")
            .with_style("padding", "20px")
            .with_style("backgroundColor", "white")
            .with_style("marginBottom", "20px"),
        Node::new("logo", NodeKind::Text)
            .with_parent("header")
            .with_content("LOGO")
            .with_style("fontWeight", "bold")
            .with_style("fontSize", "24px")
            .with_style("color", "#3B82F6"),
        Node::new("nav", NodeKind::Container)
            .with_parent("header")
            .with_order(1)
            .with_children(["nav-item-1", "nav-item-2", "nav-item-3"])
            .with_style("display", "flex")
            .with_style("gap", "20px"),
        nav_link("nav-item-1", "nav", 0, "Home"),
        nav_link("nav-item-2", "nav", 1, "Features"),
        nav_link("nav-item-3", "nav", 2, "Contact"),
        Node::new("hero", NodeKind::Container)
            .with_parent("root")
            .with_order(1)
            .with_children(["hero-title", "hero-desc", "hero-button"])
            .with_style("display", "flex")
            .with_style("flexDirection", "column")
            .with_style("alignItems", "center")
            .with_style("textAlign", "center")
            .with_style("padding", "60px 20px")
            .with_style("backgroundColor", "#F3F4F6")
            .with_style("borderRadius", "8px")
            .with_style("marginBottom", "40px"),
        Node::new("hero-title", NodeKind::Text)
            .with_parent("hero")
            .with_content("Build Your Website with Drag and Drop")
            .with_style("fontSize", "36px")
            .with_style("fontWeight", "bold")
            .with_style("marginBottom", "20px"),
        Node::new("hero-desc", NodeKind::Text)
            .with_parent("hero")
            .with_order(1)
            .with_content("Create beautiful responsive websites without writing code.")
            .with_style("fontSize", "18px")
            .with_style("color", "#6B7280")
            .with_style("marginBottom", "30px")
            .with_style("maxWidth", "600px"),
        Node::new("hero-button", NodeKind::Button)
            .with_parent("hero")
            .with_order(2)
            .with_content("Get Started")
            .with_style("backgroundColor", "#3B82F6")
            .with_style("color", "white")
            .with_style("padding", "10px 20px")
            .with_style("borderRadius", "4px")
            .with_style("cursor", "pointer"),
        Node::new("features", NodeKind::Container)
            .with_parent("root")
            .with_order(2)
            .with_children(["feature-1", "feature-2", "feature-3"])
            .with_style("display", "grid")
            .with_style("gridTemplateColumns", "repeat(3, 1fr)")
            .with_style("gap", "20px")
            .with_style("padding", "20px 0"),
    ];
    nodes.extend(feature_card(
        "feature-1",
        0,
        "Drag & Drop",
        "Build layouts intuitively with our easy drag and drop interface.",
    ));
    nodes.extend(feature_card(
        "feature-2",
        1,
        "Responsive Design",
        "All elements adapt perfectly to any screen size.",
    ));
    nodes.extend(feature_card(
        "feature-3",
        2,
        "Custom Styling",
        "Customize colors, fonts, sizes and more with our visual editor.",
    ));

    Template::new(
        "landing-page",
        "Landing Page",
        "landing-template.png",
        Snapshot::from_nodes(nodes),
    )
}

/// A post card and its title/meta/body children for the blog feed.
fn blog_post(id: &str, rank: i32, title: &str, meta: &str, body: &str) -> Vec<Node> {
    vec![
        Node::new(id, NodeKind::Container)
            .with_parent("posts")
            .with_order(rank)
            .with_children([
                format!("{id}-title"),
                format!("{id}-meta"),
                format!("{id}-content"),
            ])
            .with_style("marginBottom", "40px")
            .with_style("padding", "20px")
            .with_style("backgroundColor", "white")
            .with_style("borderRadius", "8px")
            .with_style("boxShadow", "0 2px 4px rgba(0,0,0,0.05)"),
        Node::new(format!("{id}-title"), NodeKind::Text)
            .with_parent(id)
            .with_content(title)
            .with_style("fontSize", "24px")
            .with_style("fontWeight", "bold")
            .with_style("marginBottom", "10px"),
        Node::new(format!("{id}-meta"), NodeKind::Text)
            .with_parent(id)
            .with_order(1)
            .with_content(meta)
            .with_style("fontSize", "14px")
            .with_style("color", "#6B7280")
            .with_style("marginBottom", "20px"),
        Node::new(format!("{id}-content"), NodeKind::Text)
            .with_parent(id)
            .with_order(2)
            .with_content(body),
    ]
}

fn blog() -> Template {
    let mut nodes = vec![
        page_root()
            .with_children(["header", "content"])
            .with_style("maxWidth", "1200px")
            .with_style("margin", "0 auto"),
        Node::new("header", NodeKind::Container)
            .with_parent("root")
            .with_children(["blog-title", "blog-nav"])
            .with_style("display", "flex")
            .with_style("justifyContent", "space-between")
            .with_style("alignItems", "center")
            .with_style("padding", "20px 0")
            .with_style("borderBottom", "1px solid #E5E7EB")
            .with_style("marginBottom", "40px"),
        Node::new("blog-title", NodeKind::Text)
            .with_parent("header")
            .with_content("My Blog")
            .with_style("fontSize", "24px")
            .with_style("fontWeight", "bold"),
        Node::new("blog-nav", NodeKind::Container)
            .with_parent("header")
            .with_order(1)
            .with_children(["blog-nav-1", "blog-nav-2", "blog-nav-3"])
            .with_style("display", "flex")
            .with_style("gap", "20px"),
        nav_link("blog-nav-1", "blog-nav", 0, "Home"),
        nav_link("blog-nav-2", "blog-nav", 1, "Articles"),
        nav_link("blog-nav-3", "blog-nav", 2, "About"),
        Node::new("content", NodeKind::Container)
            .with_parent("root")
            .with_order(1)
            .with_children(["posts", "sidebar"])
            .with_style("display", "grid")
            .with_style("gridTemplateColumns", "2fr 1fr")
            .with_style("gap", "40px"),
        Node::new("posts", NodeKind::Container)
            .with_parent("content")
            .with_children(["post-1", "post-2"]),
    ];
    nodes.extend(blog_post(
        "post-1",
        0,
        "Getting Started with Website Building",
        "June 15, 2023 • 5 min read",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
         tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim \
         veniam, quis nostrud exercitation ullamco laboris...",
    ));
    nodes.extend(blog_post(
        "post-2",
        1,
        "Design Tips for Better Websites",
        "June 10, 2023 • 4 min read",
        "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum \
         dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non \
         proident, sunt in culpa qui officia...",
    ));
    nodes.extend(vec![
        Node::new("sidebar", NodeKind::Container)
            .with_parent("content")
            .with_order(1)
            .with_children(["about-widget", "categories-widget"]),
        Node::new("about-widget", NodeKind::Container)
            .with_parent("sidebar")
            .with_children(["about-title", "about-content"])
            .with_style("padding", "20px")
            .with_style("backgroundColor", "white")
            .with_style("borderRadius", "8px")
            .with_style("marginBottom", "20px")
            .with_style("boxShadow", "0 2px 4px rgba(0,0,0,0.05)"),
        Node::new("about-title", NodeKind::Text)
            .with_parent("about-widget")
            .with_content("About Me")
            .with_style("fontSize", "18px")
            .with_style("fontWeight", "bold")
            .with_style("marginBottom", "10px"),
        Node::new("about-content", NodeKind::Text)
            .with_parent("about-widget")
            .with_order(1)
            .with_content(
                "Hello! I'm a web designer sharing tips and tricks about website \
                 building and design.",
            ),
        Node::new("categories-widget", NodeKind::Container)
            .with_parent("sidebar")
            .with_order(1)
            .with_children(["categories-title", "categories-list"])
            .with_style("padding", "20px")
            .with_style("backgroundColor", "white")
            .with_style("borderRadius", "8px")
            .with_style("boxShadow", "0 2px 4px rgba(0,0,0,0.05)"),
        Node::new("categories-title", NodeKind::Text)
            .with_parent("categories-widget")
            .with_content("Categories")
            .with_style("fontSize", "18px")
            .with_style("fontWeight", "bold")
            .with_style("marginBottom", "10px"),
        Node::new("categories-list", NodeKind::Container)
            .with_parent("categories-widget")
            .with_order(1)
            .with_children(["category-1", "category-2", "category-3"]),
        Node::new("category-1", NodeKind::Text)
            .with_parent("categories-list")
            .with_content("Web Design (5)")
            .with_style("marginBottom", "5px")
            .with_style("cursor", "pointer"),
        Node::new("category-2", NodeKind::Text)
            .with_parent("categories-list")
            .with_order(1)
            .with_content("Development (3)")
            .with_style("marginBottom", "5px")
            .with_style("cursor", "pointer"),
        Node::new("category-3", NodeKind::Text)
            .with_parent("categories-list")
            .with_order(2)
            .with_content("UI/UX (2)")
            .with_style("cursor", "pointer"),
    ]);

    Template::new("blog", "Blog", "blog-template.png", Snapshot::from_nodes(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maquette_document::check_integrity;

    #[test]
    fn test_builtin_catalog() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 3);

        let ids: Vec<&str> = registry.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["blank", "landing-page", "blog"]);

        assert_eq!(registry.get("blank").unwrap().name, "Blank Canvas");
        assert_eq!(registry.get("landing-page").unwrap().name, "Landing Page");
        assert_eq!(registry.get("blog").unwrap().name, "Blog");
        assert!(registry.get("portfolio").is_none());
    }

    #[test]
    fn test_template_sizes() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.get("blank").unwrap().snapshot().len(), 1);
        assert_eq!(registry.get("landing-page").unwrap().snapshot().len(), 21);
        assert_eq!(registry.get("blog").unwrap().snapshot().len(), 27);
    }

    #[test]
    fn test_every_builtin_tree_is_sound() {
        for template in TemplateRegistry::builtin().iter() {
            let violations = check_integrity(template.snapshot());
            assert!(
                violations.is_empty(),
                "template '{}' has violations: {:?}",
                template.id,
                violations
            );
            // Each starter has a root whose id is literally "root".
            assert_eq!(template.snapshot().root().map(|n| n.id.as_str()), Some("root"));
        }
    }

    #[test]
    fn test_landing_page_section_order() {
        let registry = TemplateRegistry::builtin();
        let snapshot = registry.get("landing-page").unwrap().snapshot();

        let sections: Vec<&str> = snapshot
            .sorted_children("root")
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(sections, vec!["header", "hero", "features"]);

        let hero: Vec<&str> = snapshot
            .sorted_children("hero")
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(hero, vec!["hero-title", "hero-desc", "hero-button"]);
        assert_eq!(snapshot.get("hero-button").unwrap().kind, NodeKind::Button);
    }

    #[test]
    fn test_blog_structure() {
        let registry = TemplateRegistry::builtin();
        let snapshot = registry.get("blog").unwrap().snapshot();

        assert_eq!(
            snapshot.get("content").unwrap().children,
            vec!["posts", "sidebar"]
        );
        assert_eq!(snapshot.descendants("posts").len(), 8);
        assert_eq!(
            snapshot.get("post-1-meta").unwrap().content,
            "June 15, 2023 • 5 min read"
        );
        // Unstyled structural containers really have no styles.
        assert!(snapshot.get("posts").unwrap().styles.is_empty());
    }
}
