use anyhow::Result;
use eframe::CreationContext;
use eframe::egui::{self, Align, Color32, RichText, vec2};

use crate::assets;
use crate::content::{self, ContactLink};
use crate::navigation::Navigator;
use crate::reveal::{RevealKey, RevealSchedule};
use crate::section::SectionId;
use crate::settings::AppSettings;
use crate::state::PageState;
use crate::visibility::{SectionLayout, VisibilityTracker};

const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
const ACCENT_ALT: Color32 = Color32::from_rgb(147, 51, 234);
const PORTRAIT_SIZE: f32 = 192.0;
const SECTION_PADDING: f32 = 64.0;
const CARD_WIDTH: f32 = 240.0;

const HERO_KEYS: [RevealKey; 6] = [
    RevealKey::HeroPortrait,
    RevealKey::HeroTitle,
    RevealKey::HeroRole,
    RevealKey::HeroSummary,
    RevealKey::HeroActions,
    RevealKey::HeroSocials,
];

pub struct PortfolioApp {
    state: PageState,
    tracker: VisibilityTracker,
    navigator: Navigator,
    /// Section geometry from the most recent frame.
    layout: SectionLayout,
    reveal: RevealSchedule,
    settings: AppSettings,
    portrait: Option<egui::TextureHandle>,
    started_at: Option<f64>,
    status: Option<String>,
}

impl PortfolioApp {
    pub fn new(cc: &CreationContext<'_>, settings: AppSettings) -> Self {
        let mut app = Self::from_settings(settings);
        match assets::load_portrait(&app.settings.portrait_path) {
            Ok(image) => {
                let texture =
                    cc.egui_ctx
                        .load_texture("portrait", image, egui::TextureOptions::LINEAR);
                app.portrait = Some(texture);
            }
            Err(err) => log::warn!("portrait unavailable: {err:#}"),
        }
        app
    }

    fn from_settings(settings: AppSettings) -> Self {
        Self {
            state: PageState::default(),
            tracker: VisibilityTracker::new(settings.observer_config()),
            navigator: Navigator::default(),
            layout: SectionLayout::default(),
            reveal: RevealSchedule::with_project_cards(content::PROJECTS.len()),
            settings,
            portrait: None,
            started_at: None,
            status: None,
        }
    }

    /// Navigate using last frame's geometry; the scroll runs on the next frame.
    fn navigate(&mut self, target: SectionId) -> bool {
        self.navigator
            .navigate(target, &self.layout, &mut self.state)
    }

    /// Stop observing sections. Called once when the page goes away.
    fn teardown(&mut self) {
        log::debug!("releasing {} section subscriptions", self.tracker.subscriptions());
        self.tracker.teardown();
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let started_at = *self.started_at.get_or_insert(now);
        self.state.theme.apply(ctx);

        let narrow = ctx.screen_rect().width() < self.settings.mobile_breakpoint;
        self.nav_bar(ctx, narrow);

        let mut layout = SectionLayout::default();
        let mut viewport = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let scroll_target = self.navigator.take_pending_scroll();
            egui::ScrollArea::vertical()
                .id_source("page")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let visible = ui.clip_rect();
                    viewport = Some(visible);
                    for section in SectionId::ALL {
                        let rect = ui
                            .scope(|ui| {
                                ui.set_width(ui.available_width());
                                if section == SectionId::Home {
                                    ui.set_min_height(visible.height());
                                }
                                self.section_ui(ui, section, now, started_at, narrow);
                            })
                            .response
                            .rect;
                        layout.record(section, rect);
                        if scroll_target == Some(section) {
                            ui.scroll_to_rect(rect, Some(Align::Min));
                        }
                    }
                    self.footer(ui);
                });
        });
        self.layout = layout;

        if !self.tracker.is_mounted() {
            let observed = self.tracker.mount(&self.layout);
            log::debug!("observing {observed} of {} sections", SectionId::ALL.len());
        }
        if let Some(viewport) = viewport {
            if self
                .tracker
                .poll(viewport, &self.layout, now, &mut self.state)
            {
                log::debug!(
                    "active section {} ({} seen)",
                    self.state.active.anchor(),
                    self.state.seen_count()
                );
                ctx.request_repaint();
            }
        }
        if self.is_animating(now, started_at) {
            ctx.request_repaint();
        }
    }

    fn reveal_since(&self, key: RevealKey, started_at: f64) -> Option<f64> {
        match key {
            RevealKey::Section(section) => self.state.seen_at(section),
            RevealKey::ProjectCard(_) => self.state.seen_at(SectionId::Projects),
            _ => Some(started_at),
        }
    }

    fn opacity(&self, key: RevealKey, now: f64, started_at: f64) -> f32 {
        self.reveal
            .opacity(key, self.reveal_since(key, started_at), now)
    }

    fn is_animating(&self, now: f64, started_at: f64) -> bool {
        let sections = self
            .state
            .seen_sections()
            .filter(|section| *section != SectionId::Home)
            .map(RevealKey::Section);
        let cards = (0..content::PROJECTS.len()).map(RevealKey::ProjectCard);
        HERO_KEYS
            .into_iter()
            .chain(sections)
            .chain(cards)
            .any(|key| {
                let since = self.reveal_since(key, started_at);
                since.is_some() && !self.reveal.is_settled(key, since, now)
            })
    }

    fn nav_bar(&mut self, ctx: &egui::Context, narrow: bool) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(content::MONOGRAM)
                        .size(24.0)
                        .strong()
                        .color(ACCENT),
                );
                if !narrow {
                    ui.add_space(24.0);
                    for section in SectionId::ALL {
                        let label = RichText::new(section.label());
                        let label = if self.state.active == section {
                            label.strong().color(ACCENT)
                        } else {
                            label
                        };
                        if ui
                            .selectable_label(self.state.active == section, label)
                            .clicked()
                        {
                            self.navigate(section);
                        }
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    if narrow {
                        let icon = if self.state.menu_open { "✕" } else { "☰" };
                        if ui.button(icon).clicked() {
                            self.state.toggle_menu();
                        }
                    }
                    if ui.button(self.state.theme.toggle_icon()).clicked() {
                        self.state.theme.toggle();
                        self.state.theme.apply(ctx);
                    }
                });
            });

            if narrow && self.state.menu_open {
                ui.separator();
                for section in SectionId::ALL {
                    let button = egui::Button::new(section.label()).frame(false);
                    if ui
                        .add_sized([ui.available_width(), 28.0], button)
                        .clicked()
                    {
                        self.navigate(section);
                    }
                }
            }
        });
    }

    fn section_ui(
        &mut self,
        ui: &mut egui::Ui,
        section: SectionId,
        now: f64,
        started_at: f64,
        narrow: bool,
    ) {
        ui.add_space(SECTION_PADDING);
        match section {
            SectionId::Home => self.hero_ui(ui, now, started_at),
            _ => {
                let opacity = self.opacity(RevealKey::Section(section), now, started_at);
                ui.scope(|ui| {
                    ui.set_opacity(opacity);
                    match section {
                        SectionId::About => about_ui(ui, narrow),
                        SectionId::Skills => skills_ui(ui),
                        SectionId::Projects => self.projects_ui(ui, now, started_at),
                        SectionId::Contact => contact_ui(ui),
                        SectionId::Home => {}
                    }
                });
            }
        }
        ui.add_space(SECTION_PADDING);
    }

    fn hero_ui(&mut self, ui: &mut egui::Ui, now: f64, started_at: f64) {
        ui.vertical_centered(|ui| {
            let opacity = self.opacity(RevealKey::HeroPortrait, now, started_at);
            ui.scope(|ui| {
                ui.set_opacity(opacity);
                self.portrait_ui(ui);
            });
            ui.add_space(24.0);

            let opacity = self.opacity(RevealKey::HeroTitle, now, started_at);
            ui.scope(|ui| {
                ui.set_opacity(opacity);
                ui.label(RichText::new(content::NAME).size(56.0).strong().color(ACCENT_ALT));
            });

            let opacity = self.opacity(RevealKey::HeroRole, now, started_at);
            ui.scope(|ui| {
                ui.set_opacity(opacity);
                ui.label(RichText::new(content::ROLE).size(28.0));
            });
            ui.add_space(16.0);

            let opacity = self.opacity(RevealKey::HeroSummary, now, started_at);
            ui.scope(|ui| {
                ui.set_opacity(opacity);
                ui.set_max_width(720.0);
                ui.label(RichText::new(content::SUMMARY).size(18.0));
            });
            ui.add_space(24.0);

            let opacity = self.opacity(RevealKey::HeroActions, now, started_at);
            ui.scope(|ui| {
                ui.set_opacity(opacity);
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("View My Work").color(Color32::WHITE)).fill(ACCENT))
                        .clicked()
                    {
                        self.navigator.navigate_anchor(
                            content::WORK_ANCHOR,
                            &self.layout,
                            &mut self.state,
                        );
                    }
                    if ui.button("⬇ Download Resume").clicked() {
                        if let Err(err) = self.download_resume() {
                            log::warn!("resume export failed: {err:#}");
                            self.status = Some(format!("{err:#}"));
                        }
                    }
                });
            });
            ui.add_space(24.0);

            let opacity = self.opacity(RevealKey::HeroSocials, now, started_at);
            ui.scope(|ui| {
                ui.set_opacity(opacity);
                ui.horizontal(|ui| {
                    for link in content::SOCIALS {
                        ui.hyperlink_to(RichText::new(link.kind.icon()).size(24.0), link.uri)
                            .on_hover_text(link.kind.title());
                    }
                });
            });
        });
    }

    fn portrait_ui(&self, ui: &mut egui::Ui) {
        let size = vec2(PORTRAIT_SIZE, PORTRAIT_SIZE);
        match &self.portrait {
            Some(texture) => {
                let image = egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(size)
                    .rounding(PORTRAIT_SIZE / 2.0);
                ui.add(image);
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), PORTRAIT_SIZE / 2.0, ACCENT);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    content::MONOGRAM,
                    egui::FontId::proportional(64.0),
                    Color32::WHITE,
                );
            }
        }
    }

    fn projects_ui(&self, ui: &mut egui::Ui, now: f64, started_at: f64) {
        section_heading(ui, "Featured Projects");
        ui.horizontal_wrapped(|ui| {
            for (idx, project) in content::PROJECTS.iter().enumerate() {
                let opacity = self.opacity(RevealKey::ProjectCard(idx), now, started_at);
                ui.scope(|ui| {
                    ui.set_opacity(opacity);
                    card(ui, CARD_WIDTH * 2.0, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(project.title).size(20.0).strong());
                            ui.label("↗");
                        });
                        ui.label(project.description);
                        ui.add_space(8.0);
                        ui.label(RichText::new("Key Features:").strong());
                        for feature in project.features {
                            ui.label(format!("• {feature}"));
                        }
                        ui.add_space(8.0);
                        chips(ui, project.tech);
                    });
                });
            }
        });
    }

    fn footer(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.vertical_centered(|ui| {
            if let Some(status) = &self.status {
                ui.label(RichText::new(status).italics());
            }
            ui.label(RichText::new(content::FOOTER).weak());
            ui.add_space(16.0);
        });
    }

    fn download_resume(&mut self) -> Result<()> {
        let resume = self.settings.resume_path.clone();
        let Some(dest) = assets::pick_resume_destination(&resume) else {
            return Ok(());
        };
        assets::export_resume(&resume, &dest)?;
        log::info!("resume saved to {}", dest.display());
        self.status = Some(format!("Resume saved to {}", dest.display()));
        Ok(())
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(40.0).strong());
        let (rect, _) = ui.allocate_exact_size(vec2(96.0, 4.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, ACCENT);
    });
    ui.add_space(32.0);
}

fn card(ui: &mut egui::Ui, width: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .rounding(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(width);
            add_contents(ui);
        });
}

fn chips(ui: &mut egui::Ui, labels: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for label in labels {
            egui::Frame::none()
                .fill(ui.visuals().faint_bg_color)
                .rounding(8.0)
                .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(*label).small().color(ACCENT));
                });
        }
    });
}

fn about_ui(ui: &mut egui::Ui, narrow: bool) {
    section_heading(ui, "About Me");
    let intro = |ui: &mut egui::Ui| {
        ui.label(RichText::new(content::ABOUT_HEADLINE).size(24.0).strong());
        ui.label(content::ABOUT_BODY);
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            for stat in content::STATS {
                card(ui, CARD_WIDTH / 2.0, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(stat.value).size(32.0).strong().color(ACCENT));
                        ui.label(stat.caption);
                    });
                });
            }
        });
    };
    let education = |ui: &mut egui::Ui| {
        ui.label(RichText::new("Education & Training").size(24.0).strong());
        let width = ui.available_width() - 32.0;
        for entry in content::EDUCATION {
            card(ui, width, |ui| {
                ui.label(RichText::new(entry.title).size(18.0).strong());
                ui.label(entry.institution);
                ui.label(RichText::new(entry.period).weak());
            });
        }
    };
    if narrow {
        intro(ui);
        ui.add_space(24.0);
        education(ui);
    } else {
        ui.columns(2, |columns| {
            intro(&mut columns[0]);
            education(&mut columns[1]);
        });
    }
}

fn skills_ui(ui: &mut egui::Ui) {
    section_heading(ui, "Technical Skills");
    ui.horizontal_wrapped(|ui| {
        for group in content::SKILL_GROUPS {
            card(ui, CARD_WIDTH, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(group.icon).size(32.0));
                    ui.label(RichText::new(group.title).size(20.0).strong());
                });
                ui.add_space(8.0);
                for skill in group.visible_skills() {
                    ui.label(*skill);
                }
            });
        }
    });
}

fn contact_ui(ui: &mut egui::Ui) {
    section_heading(ui, "Let's Work Together");
    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        ui.label(RichText::new(content::CONTACT_BLURB).size(18.0));
    });
    ui.add_space(24.0);
    ui.horizontal_wrapped(|ui| {
        for link in content::CONTACTS {
            contact_card(ui, link);
        }
    });
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        let button = egui::Button::new(RichText::new("✉ Get In Touch").color(Color32::WHITE))
            .fill(ACCENT);
        if ui.add(button).clicked() {
            ui.ctx()
                .open_url(egui::OpenUrl::same_tab(content::EMAIL.uri));
        }
    });
}

fn contact_card(ui: &mut egui::Ui, link: ContactLink) {
    card(ui, CARD_WIDTH, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(link.kind.icon()).size(32.0));
            ui.label(RichText::new(link.kind.title()).size(20.0).strong());
            ui.hyperlink_to(link.label, link.uri);
        });
    });
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Pos2, Rect};

    fn run_frame(ctx: &egui::Context, app: &mut PortfolioApp, time: f64) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 800.0))),
            time: Some(time),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    #[test]
    fn first_frame_mounts_and_sees_hero() {
        let ctx = egui::Context::default();
        let mut app = PortfolioApp::from_settings(AppSettings::default());
        run_frame(&ctx, &mut app, 0.0);

        assert!(app.tracker.is_mounted());
        assert_eq!(app.tracker.subscriptions(), SectionId::ALL.len());
        assert!(app.state.seen_at(SectionId::Home).is_some());
        assert!(app.state.seen_at(SectionId::Contact).is_none());
        assert_eq!(app.state.active, SectionId::Home);
    }

    #[test]
    fn navigation_updates_state_before_next_frame() {
        let ctx = egui::Context::default();
        let mut app = PortfolioApp::from_settings(AppSettings::default());
        assert!(!app.navigate(SectionId::Projects), "nothing laid out yet");

        run_frame(&ctx, &mut app, 0.0);
        app.state.menu_open = true;
        assert!(app.navigate(SectionId::Projects));
        assert_eq!(app.state.active, SectionId::Projects);
        assert!(!app.state.menu_open);
    }

    #[test]
    fn theme_toggle_reaches_egui_visuals() {
        let ctx = egui::Context::default();
        let mut app = PortfolioApp::from_settings(AppSettings::default());
        run_frame(&ctx, &mut app, 0.0);
        assert!(!ctx.style().visuals.dark_mode);

        app.state.theme.toggle();
        run_frame(&ctx, &mut app, 0.1);
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn teardown_stops_tracking() {
        let ctx = egui::Context::default();
        let mut app = PortfolioApp::from_settings(AppSettings::default());
        run_frame(&ctx, &mut app, 0.0);
        app.teardown();
        assert_eq!(app.tracker.subscriptions(), 0);

        let seen = app.state.seen_count();
        run_frame(&ctx, &mut app, 0.1);
        assert_eq!(app.state.seen_count(), seen);
    }

    #[test]
    fn exit_releases_subscriptions() {
        let ctx = egui::Context::default();
        let mut app = PortfolioApp::from_settings(AppSettings::default());
        run_frame(&ctx, &mut app, 0.0);
        assert_eq!(app.tracker.subscriptions(), SectionId::ALL.len());

        eframe::App::on_exit(&mut app);
        assert_eq!(app.tracker.subscriptions(), 0);

        let seen = app.state.seen_count();
        run_frame(&ctx, &mut app, 0.1);
        assert_eq!(app.state.seen_count(), seen);
    }

    #[test]
    fn hero_fades_in_from_start() {
        let app = PortfolioApp::from_settings(AppSettings::default());
        assert_eq!(app.opacity(RevealKey::HeroSocials, 0.5, 0.0), 0.0);
        assert_eq!(app.opacity(RevealKey::HeroSocials, 2.0, 0.0), 1.0);
        assert_eq!(app.opacity(RevealKey::Section(SectionId::Skills), 2.0, 0.0), 0.0);
        assert!(app.is_animating(0.5, 0.0));
        assert!(!app.is_animating(5.0, 0.0));
    }
}
