use super::GeneUploader;
use crate::utils::color::status_color;
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, RichText};
use rfd::FileDialog;

impl GeneUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("Gene Sequence Analysis");
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Upload a FASTQ file; results are emailed when the analysis completes")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);

            ui.group(|ui| {
                ui.label("Email address");
                ui.add_space(4.0);
                ui.add(
                    egui::TextEdit::singleline(&mut self.email)
                        .hint_text("you@example.org")
                        .desired_width(ui.available_width()),
                );
            });

            ui.add_space(10.0);

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("📁 Choose File").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("FASTQ", &["fastq", "fq", "gz"])
                            .pick_file()
                        {
                            self.select_file(Some(path));
                        }
                    }
                    ui.label(self.file_label.as_str());
                    if let Some(size) = self.selected_size {
                        ui.label(
                            RichText::new(FileSizeUtils::format_size(size))
                                .color(ui.visuals().text_color().gamma_multiply(0.6)),
                        );
                    }
                    if self.selected_file.is_some() && ui.small_button("✖").clicked() {
                        self.select_file(None);
                    }
                });
            });

            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                let button = egui::Button::new("📤 Upload").min_size(egui::vec2(200.0, 40.0));
                if ui.add_enabled(self.state.can_upload(), button).clicked() {
                    self.start_upload(ctx);
                }

                if self.state.spinner_visible() {
                    ui.add_space(10.0);
                    ui.add(egui::Spinner::new());
                }

                if !self.state.status_text.is_empty() {
                    ui.add_space(10.0);
                    match status_color(self.state.status_class) {
                        Some(color) => ui.colored_label(color, self.state.status_text.as_str()),
                        None => ui.label(self.state.status_text.as_str()),
                    };
                }
            });
        });
    }
}
