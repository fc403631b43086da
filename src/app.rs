// Viewer application - hosts the sidebar and simulates page loads
use crate::config::Config;
use crate::model::{EntryId, NavTree};
use crate::state::MemoryStore;
use crate::style::{self, Theme};
use crate::toc;
use crate::view::SidebarPanel;
use crate::widget::{self, html, ClickTarget, Sidebar};
use eframe::egui;

pub struct Viewer {
    config: Config,
    tree: NavTree,
    /// Lives as long as the window, like a browser tab's session storage.
    store: MemoryStore,
    panel: SidebarPanel,
    sidebar: Sidebar,
    page: String,
    error_message: Option<String>,
}

impl Viewer {
    pub fn new(config: Config) -> Self {
        // A TOML table of contents carries its own fold setting.
        let builtin = || toc::builtin().with_fold(config.fold);
        let tree = match &config.book.toc_file {
            Some(path) => toc::load(path).unwrap_or_else(|e| {
                log::warn!("{e}; using built-in table of contents");
                builtin()
            }),
            None => builtin(),
        };

        let page = config.book.start_page.clone();
        let mut store = MemoryStore::new();
        let mut panel = SidebarPanel::default();
        let sidebar = mount_page(&config, &tree, &page, &mut panel, &mut store);

        Self {
            config,
            tree,
            store,
            panel,
            sidebar,
            page,
            error_message: None,
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn panel(&self) -> &SidebarPanel {
        &self.panel
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Feed a sidebar click through the widget, then follow the link if any.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if let Some(href) = self.sidebar.click(target, &self.panel, &mut self.store) {
            self.follow(&href);
        }
    }

    /// Navigate to `href` as written in the rendered sidebar.
    pub fn follow(&mut self, href: &str) {
        let target = self.sidebar.location().resolve(href);
        match book_page(&self.config.book.base_url, &target) {
            Some(page) => self.load_page(page),
            None => {
                log::info!("Opening external link {target}");
                if let Err(e) = open::that(&target) {
                    self.error_message = Some(format!("Could not open {target}: {e}"));
                }
            }
        }
    }

    /// Replace the current page. The new page gets a fresh sidebar element
    /// sharing the session store with the old one.
    pub fn load_page(&mut self, page: String) {
        log::info!("Loading page {:?}", page);
        self.sidebar.unmount();
        self.panel = SidebarPanel::default();
        self.page = page;
        self.error_message = None;
        self.sidebar = mount_page(&self.config, &self.tree, &self.page, &mut self.panel, &mut self.store);
    }

    /// Next or previous chapter within the book, skipping external links.
    fn neighbour(&self, forward: bool) -> Option<String> {
        let base = self.config.book.base_url.as_str();
        let location = self.sidebar.location();
        let pages: Vec<String> = self
            .sidebar
            .tree()
            .links()
            .filter_map(|e| e.href.as_deref())
            .filter_map(|href| book_page(base, &location.resolve(href)))
            .collect();
        let current = self
            .sidebar
            .active()
            .and_then(|id| self.page_of(id))
            .and_then(|page| pages.iter().position(|p| *p == page))?;
        let next = if forward {
            current.checked_add(1)?
        } else {
            current.checked_sub(1)?
        };
        pages.get(next).cloned()
    }

    fn page_of(&self, id: EntryId) -> Option<String> {
        let href = self.sidebar.tree().get(id)?.href.as_deref()?;
        book_page(&self.config.book.base_url, &self.sidebar.location().resolve(href))
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        let title = self
            .sidebar
            .active()
            .and_then(|id| self.sidebar.tree().get(id))
            .map(|e| style::caption(e.number.as_deref(), &e.label))
            .unwrap_or_else(|| "Untitled page".to_string());
        let prev = self.neighbour(false);
        let next = self.neighbour(true);
        let mut next_page = None;

        ui.heading(title);
        ui.label(egui::RichText::new(self.sidebar.location().as_str()).weak());
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(prev.is_some(), egui::Button::new("Previous chapter")).clicked() {
                next_page = prev.clone();
            }
            if ui.add_enabled(next.is_some(), egui::Button::new("Next chapter")).clicked() {
                next_page = next.clone();
            }
        });
        if let Some(err) = &self.error_message {
            ui.colored_label(egui::Color32::RED, err);
        }
        ui.separator();
        ui.collapsing("Sidebar markup", |ui| {
            egui::ScrollArea::vertical().id_salt("markup_scroll").show(ui, |ui| {
                ui.code(html::render_html(&self.sidebar));
            });
        });

        if let Some(page) = next_page {
            self.load_page(page);
        }
    }
}

fn mount_page(
    config: &Config,
    tree: &NavTree,
    page: &str,
    panel: &mut SidebarPanel,
    store: &mut MemoryStore,
) -> Sidebar {
    widget::mount(panel, tree, &config.page_url(page), &Config::path_to_root(page), store)
}

/// Book-relative page for an absolute URL under `base_url`, without fragment.
pub fn book_page(base_url: &str, url: &str) -> Option<String> {
    let base = base_url.trim_end_matches('/');
    let rest = url.strip_prefix(base)?.strip_prefix('/')?;
    let page = rest.split('#').next().unwrap_or_default();
    Some(page.to_string())
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut clicked = None;

        egui::SidePanel::left("sidebar_panel")
            .resizable(true)
            .default_width(self.config.panel.sidebar_width)
            .width_range(style::SIDEBAR_MIN..=style::SIDEBAR_MAX)
            .show(ctx, |ui| {
                clicked = self.panel.show(ui, &self.sidebar);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui);
        });

        if let Some(target) = clicked {
            self.handle_click(target);
        }
    }
}

pub fn run(config: Config) -> eframe::Result<()> {
    let theme = Theme::from_dark_mode(config.dark_mode());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_title("tocbox"),
        ..Default::default()
    };

    eframe::run_native(
        "tocbox",
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(Viewer::new(config)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SessionStore, SCROLL_KEY};
    use crate::widget::InitialScroll;

    fn link_to(viewer: &Viewer, label: &str) -> ClickTarget {
        let entry = viewer.sidebar().tree().entries().iter().find(|e| e.label == label).unwrap();
        ClickTarget::Link(entry.id)
    }

    #[test]
    fn test_book_page() {
        let base = "https://book.example.org/";
        assert_eq!(
            book_page(base, "https://book.example.org/call_cpp_from_rust/opaque.html#x").as_deref(),
            Some("call_cpp_from_rust/opaque.html")
        );
        assert_eq!(book_page(base, "https://book.example.org/").as_deref(), Some(""));
        assert_eq!(book_page(base, "https://example.com/z"), None);
    }

    #[test]
    fn test_start_page_aliases_first_chapter() {
        let viewer = Viewer::new(Config::default());
        let active = viewer.sidebar().active().unwrap();
        assert_eq!(viewer.sidebar().tree().get(active).unwrap().label, "Zngur");
        assert_eq!(viewer.panel().pending_center(), Some(active));
    }

    #[test]
    fn test_sidebar_link_carries_scroll_to_next_page() {
        let mut viewer = Viewer::new(Config::default());
        let target = link_to(&viewer, "Fields");
        viewer.handle_click(target);

        assert_eq!(viewer.page(), "call_rust_from_cpp/fields.html");
        let active = viewer.sidebar().active().unwrap();
        assert_eq!(viewer.sidebar().tree().get(active).unwrap().label, "Fields");
        assert_eq!(viewer.sidebar().initial_scroll(), InitialScroll::Restored(0.0));
        assert_eq!(viewer.panel().pending_offset(), Some(0.0));
        assert_eq!(viewer.store().get(SCROLL_KEY), None);

        // Links in the nested page are rendered relative to it.
        let tutorial = link_to(&viewer, "Tutorial");
        viewer.handle_click(tutorial);
        assert_eq!(viewer.page(), "tutorial.html");
    }

    #[test]
    fn test_chapter_buttons_center_active_entry() {
        let mut viewer = Viewer::new(Config::default());
        assert_eq!(viewer.neighbour(false), None);
        let next = viewer.neighbour(true).unwrap();
        assert_eq!(next, "tutorial.html");
        viewer.load_page(next);
        let active = viewer.sidebar().active().unwrap();
        assert_eq!(viewer.sidebar().initial_scroll(), InitialScroll::Centered(active));
    }
}
