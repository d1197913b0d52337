// SPDX-License-Identifier: MPL-2.0
//! Editor view rendering.

use super::component::{Component, Message, Preview};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, text, text_editor, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

/// Reachability of the editing service, checked once at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Checking,
    Online,
    Offline(String),
}

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub component: &'a Component,
    pub service_status: &'a ServiceStatus,
}

/// Render the editor: the form on the left, the result pane on the right.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("editor-title")).size(typography::TITLE_LG);

    let body = Row::new()
        .spacing(spacing::LG)
        .push(
            Container::new(build_form(&ctx))
                .width(Length::FillPortion(1)),
        )
        .push(
            Container::new(build_result_pane(&ctx))
                .width(Length::FillPortion(1)),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(build_service_line(&ctx))
        .push(body);

    let card = Container::new(content)
        .padding(spacing::LG)
        .max_width(sizing::CARD_MAX_WIDTH)
        .style(styles::container::card);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn build_service_line<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.service_status {
        ServiceStatus::Checking => text(ctx.i18n.tr("service-checking"))
            .size(typography::CAPTION)
            .style(styles::text::muted)
            .into(),
        ServiceStatus::Online => text(ctx.i18n.tr("service-online"))
            .size(typography::CAPTION)
            .style(styles::text::success)
            .into(),
        ServiceStatus::Offline(reason) => {
            text(format!("{} ({})", ctx.i18n.tr("service-offline"), reason))
                .size(typography::CAPTION)
                .style(styles::text::error)
                .into()
        }
    }
}

fn build_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx.component.form();

    let upload_label = Text::new(ctx.i18n.tr("editor-upload-label")).size(typography::TITLE_SM);

    let selection_line = match form.selected_image() {
        Some(image) => {
            let mut line = format!("{} {}", ctx.i18n.tr("editor-selected-file"), image.name());
            if let Some((width, height)) = image.dimensions() {
                line.push_str(&format!(" ({width}×{height})"));
            }
            text(line).size(typography::BODY)
        }
        None => text(ctx.i18n.tr("editor-upload-helper"))
            .size(typography::CAPTION)
            .style(styles::text::muted),
    };

    let upload_content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(text("⬆").size(typography::ICON_GLYPH))
        .push(text(ctx.i18n.tr("editor-upload-hint")).size(typography::BODY))
        .push(selection_line);

    let upload_button = button(
        container(upload_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::UPLOAD_AREA_HEIGHT))
    .on_press(Message::PickImage)
    .style(styles::button::upload_area);

    let upload_area = Container::new(upload_button).style(styles::container::upload_area);

    let prompt_label = Text::new(ctx.i18n.tr("editor-prompt-label")).size(typography::TITLE_SM);

    let prompt = text_editor(ctx.component.instruction_content())
        .placeholder(ctx.i18n.tr("editor-prompt-placeholder"))
        .on_action(Message::InstructionEdited)
        .height(Length::Fixed(sizing::PROMPT_HEIGHT))
        .size(typography::BODY);

    let submit_label = if form.is_submitting() {
        ctx.i18n.tr("editor-submitting")
    } else {
        ctx.i18n.tr("editor-submit")
    };
    let submit = button(
        container(text(submit_label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe(form.can_submit().then_some(Message::Submit))
    .style(styles::button::primary);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(upload_label)
        .push(upload_area)
        .push(prompt_label)
        .push(prompt);

    if let Some(error) = form.error() {
        let message = match error.i18n_key() {
            Some(key) => match error.detail() {
                Some(detail) => format!("{} {}", ctx.i18n.tr(key), detail),
                None => ctx.i18n.tr(key),
            },
            None => error.to_string(),
        };
        column = column.push(
            text(message)
                .size(typography::BODY)
                .style(styles::text::error),
        );
    }

    column.push(submit).into()
}

fn build_result_pane<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match ctx.component.preview() {
        Preview::Empty => text(ctx.i18n.tr("editor-result-placeholder"))
            .size(typography::BODY)
            .style(styles::text::muted)
            .into(),
        Preview::Loading => text(ctx.i18n.tr("editor-result-loading"))
            .size(typography::BODY)
            .style(styles::text::muted)
            .into(),
        Preview::Ready(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Preview::Unavailable(reason) => Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(text(ctx.i18n.tr("editor-result-unavailable")).size(typography::BODY))
            .push(
                text(reason.as_str())
                    .size(typography::CAPTION)
                    .style(styles::text::error),
            )
            .into(),
    };

    let frame = Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_MIN))
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::preview_frame);

    let mut column = Column::new().spacing(spacing::XS).push(frame);
    if let Some(reference) = ctx.component.form().result() {
        column = column.push(
            text(reference.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editing::{ImageMediaType, SelectedImage};

    #[test]
    fn editor_view_renders_empty_form() {
        let i18n = I18n::default();
        let component = Component::new();
        let status = ServiceStatus::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            component: &component,
            service_status: &status,
        });
    }

    #[test]
    fn editor_view_renders_with_selection_and_error() {
        let i18n = I18n::default();
        let mut component = Component::new();
        component.update(Message::ImageLoaded(Ok(SelectedImage::new(
            "photo.jpg",
            ImageMediaType::Jpeg,
            vec![0xFF, 0xD8],
        )
        .with_dimensions(640, 480))));
        // Blank instruction: submitting sets the inline error.
        component.update(Message::Submit);
        assert!(component.form().error().is_some());

        let status = ServiceStatus::Offline("connection refused".into());
        let _element = view(ViewContext {
            i18n: &i18n,
            component: &component,
            service_status: &status,
        });
    }
}
