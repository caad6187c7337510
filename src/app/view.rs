// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Windowed mode shows the page (header, stage, dots, thumbnails, counter);
//! fullscreen mode replaces it with the black overlay. Toasts float above
//! either one.

use super::Message;
use crate::gallery::{Catalog, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, SlideImage};
use crate::ui::controls;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::transition::ActiveTransition;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub gallery: &'a GalleryState,
    pub slides: &'a [SlideImage],
    pub transition: Option<ActiveTransition>,
    pub now: Instant,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let carousel_ctx = carousel::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        state: ctx.gallery,
        slides: ctx.slides,
        transition: ctx.transition,
        now: ctx.now,
    };

    let body: Element<'_, Message> = if ctx.gallery.is_fullscreen() {
        carousel::fullscreen(carousel_ctx).map(Message::Carousel)
    } else {
        view_page(&ctx, carousel_ctx)
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(toasts)
        .into()
}

fn view_page<'a>(
    ctx: &ViewContext<'a>,
    carousel_ctx: carousel::ViewContext<'a>,
) -> Element<'a, Message> {
    let controls_ctx = controls::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        state: ctx.gallery,
        slides: ctx.slides,
    };

    let content: Element<'a, carousel::Message> = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(controls::header(ctx.i18n))
        .push(carousel::stage(carousel_ctx))
        .push(controls::dots(controls_ctx))
        .push(controls::thumbnails(controls_ctx))
        .push(controls::footer(controls_ctx))
        .into();

    Container::new(scrollable(
        Container::new(content.map(Message::Carousel))
            .center_x(Length::Fill)
            .padding(spacing::XL),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page)
    .into()
}
