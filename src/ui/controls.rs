// SPDX-License-Identifier: MPL-2.0
//! Navigation strips below the stage: dot indicators, thumbnails and the
//! position counter.

use crate::gallery::{Catalog, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{Message, SlideImage};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, text, tooltip, Container, Row, Stack, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub state: &'a GalleryState,
    pub slides: &'a [SlideImage],
}

/// Human-facing position, e.g. `2 / 3`.
#[must_use]
pub fn counter_label(i18n: &I18n, state: &GalleryState) -> String {
    let current = (state.current_index() + 1).to_string();
    let total = state.len().get().to_string();
    i18n.tr_with_args(
        "slide-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    )
}

/// One dot per slide; the active one is drawn as a wide gold pill.
pub fn dots<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.state.current_index();

    let row = (0..ctx.state.len().get()).fold(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center),
        |row, index| {
            let active = index == current;
            let width = if active {
                sizing::DOT_ACTIVE_WIDTH
            } else {
                sizing::DOT
            };
            let dot = button(Text::new(""))
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .on_press(Message::JumpTo(index))
                .style(styles::button::dot(active));
            let position = (index + 1).to_string();
            let label = ctx
                .i18n
                .tr_with_args("tooltip-go-to", &[("n", position.as_str())]);
            row.push(styles::tooltip::styled(dot, label, tooltip::Position::Bottom))
        },
    );

    Container::new(row).center_x(Length::Fill).into()
}

/// Thumbnail strip; the active thumbnail gets a gold ring and tint.
pub fn thumbnails<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.state.current_index();

    let row = ctx.catalog.iter().enumerate().fold(
        Row::new().spacing(spacing::SM),
        |row, (index, _image)| {
            let active = index == current;
            let slide = ctx.slides.get(index).unwrap_or(&SlideImage::Failed);
            let face: Element<'a, Message> = match slide {
                SlideImage::Ready(handle) => Image::new(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .opacity(if active {
                        opacity::OPAQUE
                    } else {
                        opacity::INACTIVE_THUMBNAIL
                    })
                    .into(),
                SlideImage::Loading | SlideImage::Failed => {
                    Container::new(icons::sized(Icon::Image, sizing::ICON_LG, palette::GRAY_700))
                        .center(Length::Fill)
                        .into()
                }
            };

            let mut layers = Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(face);
            if active {
                layers = layers.push(
                    Container::new(Text::new(""))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_theme: &Theme| iced::widget::container::Style {
                            background: Some(iced::Background::Color(Color {
                                a: 0.2,
                                ..palette::GOLD_500
                            })),
                            ..Default::default()
                        }),
                );
            }

            row.push(
                button(layers)
                    .width(Length::FillPortion(1))
                    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                    .padding(spacing::XXS / 2.0)
                    .on_press(Message::JumpTo(index))
                    .style(styles::button::thumbnail(active)),
            )
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::STAGE_MAX_WIDTH)
        .into()
}

/// Page heading above the stage.
pub fn header<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    iced::widget::Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("gallery-title"))
                .size(typography::DISPLAY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_50),
                }),
        )
        .push(
            Text::new(i18n.tr("gallery-subtitle"))
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        )
        .into()
}

/// Position counter in the footer.
pub fn footer<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(counter_label(ctx.i18n, ctx.state))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_500),
            }),
    )
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn english() -> I18n {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        i18n
    }

    #[test]
    fn counter_is_one_based() {
        let i18n = english();
        let mut state = GalleryState::new(NonZeroUsize::new(3).unwrap());
        assert_eq!(counter_label(&i18n, &state), "1 / 3");
        state.retreat();
        assert_eq!(counter_label(&i18n, &state), "3 / 3");
    }

    #[test]
    fn strips_build_for_every_slide_state() {
        let i18n = english();
        let catalog = Catalog::builtin();
        let state = GalleryState::new(catalog.len());
        let slides = vec![SlideImage::Loading, SlideImage::Failed, SlideImage::Loading];
        let ctx = ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            state: &state,
            slides: &slides,
        };
        let _ = dots(ctx);
        let _ = thumbnails(ctx);
        let _ = footer(ctx);
        let _ = header(&i18n);
    }
}
