// SPDX-License-Identifier: MPL-2.0
//! Placeholder grid drawn while the first page loads.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::masonry::clamp_columns;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Row, Space};
use iced::{Element, Length};

/// Blocks per column.
pub const ROWS: usize = 4;

/// Heights of the blocks in `column`, cycling through the skeleton heights
/// with a per-column shift so neighbours do not line up.
pub fn block_heights(column: usize) -> [f32; ROWS] {
    let table = sizing::SKELETON_HEIGHTS;
    std::array::from_fn(|row| table[(row + column) % table.len()])
}

pub fn grid<'a, Message: 'a>(columns: u16, colors: &ColorScheme) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::GRID_GAP).width(Length::Fill);

    for column in 0..usize::from(clamp_columns(columns)) {
        let mut blocks = Column::new().spacing(spacing::GRID_GAP).width(Length::Fill);
        for height in block_heights(column) {
            blocks = blocks.push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(height))
                    .style(styles::container::skeleton(colors)),
            );
        }
        row = row.push(blocks);
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::GRID_GAP)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbouring_columns_are_offset() {
        assert_ne!(block_heights(0), block_heights(1));
        assert_eq!(block_heights(0)[1], block_heights(1)[0]);
    }

    #[test]
    fn pattern_repeats_after_table_length() {
        let len = sizing::SKELETON_HEIGHTS.len();
        assert_eq!(block_heights(0), block_heights(len));
    }
}
