// src/ui.rs
use raycast_light::engine_lib::{Animator, RayCastMap};
use raycast_light::sweep::MAX_RAY_COUNT;

pub fn build_ui(ctx: &egui::Context, map: &mut RayCastMap) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.add_enabled(!map.is_running(), egui::Button::new("Start")).clicked() {
                map.start();
            }
            if ui.add_enabled(map.is_running(), egui::Button::new("Stop")).clicked() {
                map.stop();
            }
            ui.separator();

            ui.label("Rays:");
            ui.add(egui::DragValue::new(&mut map.config.ray_count).clamp_range(1..=MAX_RAY_COUNT));
            ui.separator();

            ui.menu_button("Options", |ui| {
                let options = &mut map.options;
                ui.checkbox(&mut options.draw_fps, "FPS");
                ui.checkbox(&mut options.draw_intersect_points, "Intersections");
                ui.checkbox(&mut options.draw_light_source, "Lights");
                ui.checkbox(&mut options.draw_shape_joints, "Joints");
                ui.checkbox(&mut options.draw_bounds, "Bounds");
                ui.checkbox(&mut options.draw_sectors, "Sectors");
            });
            ui.separator();

            egui::ComboBox::from_id_source("animator")
                .selected_text(map.animator.name())
                .show_ui(ui, |ui| {
                    for animator in Animator::ALL {
                        ui.selectable_value(&mut map.animator, animator, animator.name());
                    }
                });
        });
    });
}
