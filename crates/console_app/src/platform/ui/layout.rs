use console_core::{AppViewModel, Msg};

use super::constants::*;
use super::render::{render_form, render_result};

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    }
}

/// Lays out the form (left) and the result presenter (right) and collects
/// the messages produced by user interaction this frame.
pub fn show(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.heading(APP_TITLE);
        ui.label(APP_TAGLINE);
        ui.weak(APP_SUBTAGLINE);
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.columns(2, |columns| {
            egui::Frame::group(columns[0].style()).show(&mut columns[0], |ui| {
                render_form(ui, &view.form, &mut msgs);
            });
            egui::Frame::group(columns[1].style()).show(&mut columns[1], |ui| {
                render_result(ui, &view.result, &mut msgs);
            });
        });
    });

    msgs
}
