use cm_components::CrystalCapacitor;
use cm_sim::{run_sim, SimOptions, SimRecord};
use egui_plot::{Legend, Line, Plot, PlotPoints};

pub struct CrystalMemApp {
    options: SimOptions,
    record: SimRecord,
    last_error: Option<String>,
}

impl CrystalMemApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            options: SimOptions::default(),
            record: SimRecord::default(),
            last_error: None,
        };
        app.rerun();
        app
    }

    /// Rebuild a default capacitor and drive it with the current options.
    /// Runs are milliseconds, so this stays on the UI thread.
    fn rerun(&mut self) {
        let mut capacitor = CrystalCapacitor::default();
        match run_sim(&mut capacitor, &self.options) {
            Ok(record) => {
                self.record = record;
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn show_run_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Run Parameters");
        ui.separator();

        ui.add(
            egui::Slider::new(&mut self.options.stimulus_samples, 2..=500)
                .text("Stimulus samples"),
        );
        ui.add(
            egui::Slider::new(&mut self.options.stimulus_amplitude, 0.0..=50.0)
                .text("Amplitude"),
        );
        ui.add(egui::Slider::new(&mut self.options.relax_steps, 0..=200).text("Relax steps"));
        ui.add(
            egui::Slider::new(&mut self.options.decay_factor, 0.0..=1.0).text("Decay factor"),
        );

        ui.separator();

        if ui.button("Run").clicked() {
            self.rerun();
        }

        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::RED, err);
        }
    }

    fn show_trace_plot(&self, ui: &mut egui::Ui) {
        ui.heading("Crystal Dielectric Permittivity Over Time");
        ui.separator();

        if self.record.is_empty() {
            ui.label("No samples recorded");
            return;
        }

        let points: Vec<[f64; 2]> = self
            .record
            .step
            .iter()
            .zip(&self.record.permittivity)
            .map(|(&step, &e)| [step as f64, e])
            .collect();
        let plot_points: PlotPoints = points.into();
        let line = Line::new(plot_points).name("effective permittivity");

        Plot::new("permittivity_plot")
            .legend(Legend::default())
            .x_axis_label("Time Step")
            .y_axis_label("Effective Permittivity")
            .show_grid(true)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }
}

impl eframe::App for CrystalMemApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("run_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.show_run_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_trace_plot(ui);
        });
    }
}
