// SPDX-License-Identifier: MPL-2.0
//! Banner shown at the top of the gallery while the network is unreachable.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("📵").size(typography::BODY))
        .push(Text::new(i18n.tr("offline-banner")).size(typography::BODY_SM));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::banner(colors.offline_banner))
        .into()
}
