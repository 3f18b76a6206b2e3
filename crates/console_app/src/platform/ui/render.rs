use console_core::{FieldEdit, FormViewModel, Msg, Provider, ResultViewModel};
use egui::{Color32, RichText};

use super::constants::*;

const ERROR_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const MUTED_COLOR: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);

pub fn render_form(ui: &mut egui::Ui, form: &FormViewModel, msgs: &mut Vec<Msg>) {
    ui.heading(FORM_HEADING);
    ui.label(RichText::new(FORM_SUBHEADING).color(MUTED_COLOR));
    ui.add_space(12.0);

    ui.label(LABEL_PROVIDER);
    egui::ComboBox::from_id_salt("provider")
        .selected_text(form.provider.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for provider in Provider::ALL {
                let selected = provider == form.provider;
                // Re-selecting the current provider must not reset the endpoints.
                if ui.selectable_label(selected, provider.label()).clicked() && !selected {
                    msgs.push(Msg::FieldEdited(FieldEdit::Provider(provider)));
                }
            }
        });
    ui.add_space(8.0);

    text_field(
        ui,
        LABEL_SECRET_ID,
        HINT_SECRET_ID,
        &form.secret_id,
        false,
        msgs,
        FieldEdit::SecretId,
    );
    text_field(
        ui,
        LABEL_SECRET_KEY,
        HINT_SECRET_KEY,
        &form.secret_key,
        true,
        msgs,
        FieldEdit::SecretKey,
    );
    text_field(
        ui,
        LABEL_TOKEN,
        HINT_TOKEN,
        &form.token,
        false,
        msgs,
        FieldEdit::Token,
    );
    text_field(
        ui,
        LABEL_ROLE_ARN,
        HINT_ROLE_ARN,
        &form.role_arn,
        false,
        msgs,
        FieldEdit::RoleArn,
    );

    let arrow = if form.show_advanced { "⏷" } else { "⏵" };
    if ui.button(format!("{arrow} {LABEL_ADVANCED}")).clicked() {
        msgs.push(Msg::AdvancedToggled);
    }

    if form.show_advanced {
        ui.indent("advanced", |ui| {
            text_field(
                ui,
                LABEL_DESTINATION,
                form.destination_placeholder,
                &form.destination,
                false,
                msgs,
                FieldEdit::Destination,
            );
            text_field(
                ui,
                LABEL_LOGIN_URL,
                form.login_url_placeholder,
                &form.login_url,
                false,
                msgs,
                FieldEdit::LoginUrl,
            );
        });
    }

    if let Some(error) = &form.error {
        ui.add_space(8.0);
        ui.colored_label(ERROR_COLOR, error);
    }

    if form.loading {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label(LOADING_TEXT);
        });
    }
}

fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    current: &str,
    password: bool,
    msgs: &mut Vec<Msg>,
    edit: fn(String) -> FieldEdit,
) {
    ui.label(label);
    let mut buffer = current.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .password(password)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(Msg::FieldEdited(edit(buffer)));
    }
    ui.add_space(8.0);
}

pub fn render_result(ui: &mut egui::Ui, result: &ResultViewModel, msgs: &mut Vec<Msg>) {
    let heading = if result.url.is_some() {
        RESULT_HEADING_READY
    } else {
        RESULT_HEADING_EMPTY
    };
    ui.heading(heading);
    ui.add_space(12.0);

    egui::Frame::canvas(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_height(120.0);
            ui.set_width(ui.available_width());
            match &result.url {
                Some(url) => {
                    ui.add(egui::Label::new(RichText::new(url).monospace()).wrap());
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(RESULT_PLACEHOLDER).color(MUTED_COLOR));
                        ui.label(RichText::new(RESULT_VALIDITY_NOTE).small().color(MUTED_COLOR));
                    });
                }
            }
        });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let copy_label = if result.copied { BUTTON_COPIED } else { BUTTON_COPY };
        if ui
            .add_enabled(result.copy_enabled, egui::Button::new(copy_label))
            .clicked()
        {
            msgs.push(Msg::CopyClicked);
        }
        if ui
            .add_enabled(result.open_enabled, egui::Button::new(BUTTON_OPEN))
            .clicked()
        {
            msgs.push(Msg::OpenClicked);
        }
    });

    ui.add_space(8.0);
    ui.label(RichText::new(RESULT_FOOTER).small().color(MUTED_COLOR));
}
