use crate::frame::FrameStats;
use crate::params::{ParameterChange, Parameters};

/// On-screen sliders bound to the Parameter Set.
///
/// Edits are reported through a callback, and only when a value actually
/// changed, so the frame loop never has to diff parameters itself.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    params: Parameters,
    visible: bool,
}

impl ControlPanel {
    pub fn new(params: Parameters, visible: bool) -> Self {
        Self { params, visible }
    }

    pub fn parameters(&self) -> Parameters {
        self.params
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_count(&mut self, count: u32, on_change: &mut impl FnMut(ParameterChange)) {
        if let Some(change) = self.params.set_count(count) {
            on_change(change);
        }
    }

    pub fn set_angle(&mut self, angle: f32, on_change: &mut impl FnMut(ParameterChange)) {
        if let Some(change) = self.params.set_angle(angle) {
            on_change(change);
        }
    }

    /// Lay out the panel for this frame
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        stats: &FrameStats,
        mut on_change: impl FnMut(ParameterChange),
    ) {
        if !self.visible {
            return;
        }

        egui::Window::new("Controls")
            .title_bar(true)
            .resizable(false)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(220.0)
            .show(ctx, |ui| {
                let mut count = self.params.count;
                let count_slider = egui::Slider::new(&mut count, Parameters::COUNT_RANGE)
                    .step_by(1.0)
                    .text("count");
                if ui.add(count_slider).changed() {
                    self.set_count(count, &mut on_change);
                }

                let mut angle = self.params.angle;
                let angle_slider =
                    egui::Slider::new(&mut angle, Parameters::ANGLE_RANGE).text("angle");
                if ui.add(angle_slider).changed() {
                    self.set_angle(angle, &mut on_change);
                }

                ui.add_space(5.0);
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{:.0} FPS  {:.2} ms",
                        stats.fps(),
                        stats.frame_time_ms()
                    ))
                    .size(12.0)
                    .color(egui::Color32::GRAY),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn programmatic_edits_notify_once() {
        let mut panel = ControlPanel::new(Parameters::default(), true);
        let mut changes: Vec<ParameterChange> = Vec::new();
        let mut record = |c: ParameterChange| changes.push(c);

        panel.set_count(6, &mut record);
        panel.set_count(8, &mut record);
        panel.set_angle(100.0, &mut record);
        panel.set_angle(30.0, &mut record);

        assert_eq!(
            changes,
            vec![ParameterChange::Count(8), ParameterChange::Angle(30.0)]
        );
        assert_eq!(panel.parameters(), Parameters::new(8, 30.0));
    }

    #[test]
    fn idle_frame_emits_nothing() {
        let ctx = egui::Context::default();
        let mut panel = ControlPanel::new(Parameters::default(), true);
        let stats = FrameStats::new();
        let mut changes: Vec<ParameterChange> = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            panel.show(ctx, &stats, |c| changes.push(c));
        });

        assert!(changes.is_empty());
        assert_eq!(panel.parameters(), Parameters::default());
    }

    #[test]
    fn hidden_panel_still_tracks_parameters() {
        let mut panel = ControlPanel::new(Parameters::new(4, 10.0), false);
        assert!(!panel.is_visible());
        let mut changes: Vec<ParameterChange> = Vec::new();
        panel.set_angle(20.0, &mut |c| changes.push(c));
        assert_eq!(changes, vec![ParameterChange::Angle(20.0)]);
    }
}
