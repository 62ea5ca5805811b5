use eframe::egui::{self, Align, Align2, Color32, Key, Layout, RichText, TextEdit};
use eframe::Frame;
use egui_extras::{Column, TableBuilder};
use egui_plot::{Line, Plot, PlotPoints};

use calculator::Entry;
use config::{Config, ExportConfig};
use state::{Action, NoticeKind, State};

pub mod calculator;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod state;

pub const TITLE: &str = "InterestMe 2.0";

pub struct App {
    export: ExportConfig,
    state: State,
    plotted: u64,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut action = None;
        let enabled = self.state.notice.is_none();
        let refit = self.plotted != self.state.revision;
        self.plotted = self.state.revision;
        let State {
            inputs,
            series,
            export_dir,
            notice,
            ..
        } = &mut self.state;

        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Interest Rate (%):");
                    ui.add(TextEdit::singleline(&mut inputs.rate).desired_width(80.0));
                    ui.label("Initial Investment:");
                    ui.add(TextEdit::singleline(&mut inputs.principal).desired_width(120.0));
                    ui.label("Years to Invest:");
                    let years = ui.add(TextEdit::singleline(&mut inputs.years).desired_width(60.0));
                    if years.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        action = Some(Action::Calculate);
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("Save to:");
                    ui.add(TextEdit::singleline(&mut *export_dir).desired_width(f32::INFINITY));
                });
            });
        });

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            egui::widgets::global_theme_preference_switch(ui);
        });

        let width = ctx.screen_rect().width();
        egui::SidePanel::left("results")
            .resizable(true)
            .default_width(width * 0.3)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Calculate").clicked() {
                            action = Some(Action::Calculate);
                        }
                        if ui.button("Clear").clicked() {
                            action = Some(Action::Clear);
                        }
                        if ui.button("Save").clicked() {
                            action = Some(Action::Save);
                        }
                    });
                });
                ui.separator();

                let rows = series.as_deref().unwrap_or_default();
                let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(Layout::left_to_right(Align::Center))
                    .column(Column::initial(60.0))
                    .column(Column::remainder())
                    .header(text_height, |mut header| {
                        header.col(|ui| {
                            ui.strong("Year");
                        });
                        header.col(|ui| {
                            ui.strong("Total");
                        });
                    })
                    .body(|body| {
                        body.rows(text_height, rows.len(), |mut row| {
                            let entry = &rows[row.index()];
                            row.col(|ui| {
                                ui.label(entry.year.to_string());
                            });
                            row.col(|ui| {
                                ui.label(entry.total().to_string());
                            });
                        });
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(chart::TITLE));
            let mut plot = Plot::new("interest_chart")
                .x_axis_label(chart::X_LABEL)
                .y_axis_label(chart::Y_LABEL);
            if refit {
                plot = plot.reset();
            }
            plot.show(ui, |plot_ui| {
                if let Some(series) = series.as_ref().filter(|s| !s.is_empty()) {
                    let points: PlotPoints = series.iter().map(Entry::point).collect();
                    plot_ui.line(Line::new(points).name(chart::Y_LABEL));
                }
            });
        });

        if let Some(notice) = notice.as_ref() {
            egui::Window::new(notice.title.as_str())
                .id(egui::Id::new("notice"))
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    let text = RichText::new(notice.message.as_str());
                    ui.label(match notice.kind {
                        NoticeKind::Error => text.color(Color32::RED),
                        NoticeKind::Info => text,
                    });
                    if ui.button("OK").clicked() {
                        action = Some(Action::DismissNotice);
                    }
                });
        }

        if let Some(action) = action {
            self.state.apply(action, &self.export);
            ctx.request_repaint();
        }
    }
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, cfg: Config) -> Self {
        Self {
            export: cfg.export(),
            state: State::new(cfg.output_dir.to_string_lossy().into_owned()),
            plotted: 0,
        }
    }
}
