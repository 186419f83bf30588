use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `Rect` of the given size centered within `area`, shrunk as
/// needed to fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(centered);
    centered
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 26), Size::new(66, 26), Rect::new(7, 0, 66, 26))]
    #[case(Rect::new(0, 1, 80, 26), Size::new(66, 26), Rect::new(7, 1, 66, 26))]
    #[case(Rect::new(0, 0, 100, 41), Size::new(80, 27), Rect::new(10, 7, 80, 27))]
    #[case(Rect::new(5, 5, 10, 10), Size::new(10, 10), Rect::new(5, 5, 10, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }

    #[test]
    fn display_area_of_exact_fit() {
        let area = Rect::new(0, 0, 80, 27);
        assert_eq!(get_display_area(area), area);
    }
}
