//! # Dialogs
//!
//! Modal dialogs for the auth flow, nickname change and NFT upload. At most
//! one is open; which one is decided by `AppState::dialog`.

use crate::app::{App, AppState, Dialog, VerifyMode, UPLOAD_FEE};
use crate::i18n::Label;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::icons::material;

const DIALOG_WIDTH: f32 = 360.0;

/// Render the open dialog, if any
pub fn render(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(dialog) = state.dialog else {
        return;
    };

    let response = egui::Modal::new(egui::Id::new(("dialog", dialog as u8))).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        match dialog {
            Dialog::Login => login(ui, state, app, theme),
            Dialog::Register => register(ui, state, app, theme),
            Dialog::Verify => verify(ui, state, app, theme),
            Dialog::ForgotPassword => forgot_password(ui, state, app, theme),
            Dialog::ResetPassword => reset_password(ui, state, app, theme),
            Dialog::UpdateNickname => update_nickname(ui, state, app, theme),
            Dialog::UploadNft => upload_nft(ui, state, app, theme),
        }
    });

    if response.should_close() {
        app.close_dialog();
    }
}

fn idle(state: &AppState) -> bool {
    state.in_flight.is_none()
}

fn login(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, state.t(Label::Login), theme);
    let form = &state.forms.login;

    forms::text_field(ui, app, state.t(Label::Email), &form.email, false, |f| &mut f.login.email);
    let password = forms::text_field(ui, app, state.t(Label::Password), &form.password, true, |f| {
        &mut f.login.password
    });
    ui.add_space(12.0);

    let clicked =
        forms::render_button(ui, state.t(Label::Login), Some(material::LOGIN), theme, idle(state))
            .clicked();
    if clicked || (idle(state) && forms::submitted(ui, &password)) {
        app.handle_login_submit();
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.link(state.t(Label::ForgotPassword)).clicked() {
            app.open_dialog(Dialog::ForgotPassword);
        }
        if ui.link(state.t(Label::Register)).clicked() {
            app.open_dialog(Dialog::Register);
        }
    });
}

fn register(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, state.t(Label::Register), theme);
    let form = &state.forms.register;

    forms::text_field(ui, app, state.t(Label::Email), &form.email, false, |f| {
        &mut f.register.email
    });
    forms::text_field(ui, app, state.t(Label::Password), &form.password, true, |f| {
        &mut f.register.password
    });
    let nickname_label = format!("{} ({})", state.t(Label::Nickname), state.t(Label::Optional));
    forms::text_field(ui, app, &nickname_label, &form.nickname, false, |f| {
        &mut f.register.nickname
    });
    ui.add_space(12.0);

    if forms::render_button(ui, state.t(Label::Register), Some(material::PERSON_ADD), theme, idle(state))
        .clicked()
    {
        app.handle_register_submit();
    }

    ui.add_space(6.0);
    if ui.link(state.t(Label::Login)).clicked() {
        app.open_dialog(Dialog::Login);
    }
}

fn verify(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, state.t(Label::VerifyEmail), theme);

    let mode = state
        .session
        .pending_verification
        .as_ref()
        .map(|p| p.mode)
        .unwrap_or_default();
    let form = &state.forms.verify;

    let field = match mode {
        VerifyMode::Code => {
            forms::render_hint(ui, state.t(Label::EnterCode), theme);
            forms::text_field(ui, app, state.t(Label::VerificationCode), &form.code, false, |f| {
                &mut f.verify.code
            })
        }
        VerifyMode::Password => {
            forms::render_hint(ui, state.t(Label::EnterPasswordToVerify), theme);
            forms::text_field(ui, app, state.t(Label::Password), &form.password, true, |f| {
                &mut f.verify.password
            })
        }
    };
    ui.add_space(12.0);

    let clicked = forms::render_button(ui, state.t(Label::Verify), None, theme, idle(state)).clicked();
    if clicked || (idle(state) && forms::submitted(ui, &field)) {
        app.handle_verify_submit();
    }

    ui.add_space(6.0);
    match mode {
        VerifyMode::Code => {
            ui.horizontal(|ui| {
                ui.label(state.t(Label::NoCode));
                if ui.link(state.t(Label::UsePassword)).clicked() {
                    app.handle_switch_verify_mode();
                }
            });
        }
        VerifyMode::Password => {
            if ui.link(state.t(Label::VerificationCode)).clicked() {
                app.handle_switch_verify_mode();
            }
        }
    }
}

fn forgot_password(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, state.t(Label::ResetPassword), theme);

    let email = forms::text_field(
        ui,
        app,
        state.t(Label::Email),
        &state.forms.forgot_password.email,
        false,
        |f| &mut f.forgot_password.email,
    );
    ui.add_space(12.0);

    let clicked =
        forms::render_button(ui, state.t(Label::SendCode), Some(material::SEND), theme, idle(state))
            .clicked();
    if clicked || (idle(state) && forms::submitted(ui, &email)) {
        app.handle_forgot_password_submit();
    }
}

fn reset_password(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, state.t(Label::ResetPassword), theme);
    let form = &state.forms.reset_password;

    forms::render_hint(ui, state.t(Label::EnterCode), theme);
    forms::text_field(ui, app, state.t(Label::VerificationCode), &form.code, false, |f| {
        &mut f.reset_password.code
    });
    forms::text_field(ui, app, state.t(Label::NewPassword), &form.new_password, true, |f| {
        &mut f.reset_password.new_password
    });
    ui.add_space(12.0);

    if forms::render_button(ui, state.t(Label::ResetPassword), None, theme, idle(state)).clicked() {
        app.handle_reset_password_submit();
    }
}

fn update_nickname(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, state.t(Label::UpdateNickname), theme);

    let field = forms::text_field(ui, app, state.t(Label::Nickname), &state.forms.nickname, false, |f| {
        &mut f.nickname
    });
    ui.add_space(12.0);

    let clicked = forms::render_button(ui, state.t(Label::Save), Some(material::EDIT), theme, idle(state))
        .clicked();
    if clicked || (idle(state) && forms::submitted(ui, &field)) {
        app.handle_nickname_submit();
    }
}

fn upload_nft(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, state.t(Label::UploadNft), theme);
    let form = &state.forms.upload;

    forms::text_field(ui, app, state.t(Label::Title), &form.title, false, |f| &mut f.upload.title);
    forms::text_area(ui, app, state.t(Label::Description), &form.description, |f| {
        &mut f.upload.description
    });
    forms::text_field(ui, app, state.t(Label::ImageUrl), &form.image_url, false, |f| {
        &mut f.upload.image_url
    });
    forms::text_field(ui, app, state.t(Label::Price), &form.price, false, |f| &mut f.upload.price);
    ui.add_space(8.0);

    let balance = state.session.current_user.as_ref().map_or(0, |u| u.balance);
    forms::render_hint(ui, state.t(Label::UploadCost), theme);
    if balance < UPLOAD_FEE {
        ui.label(egui::RichText::new(state.t(Label::NotEnoughBalance)).color(theme.colors.error));
    }
    ui.add_space(8.0);

    if forms::render_button(ui, state.t(Label::UploadNft), Some(material::UPLOAD), theme, true).clicked() {
        app.handle_upload_submit();
    }
}
