//! Collision queries over anything with [`Bounds`]
//!
//! Everything on the board is an axis-aligned rectangle, so a collision is
//! simply an overlap of integer rectangles.

use super::rect::{Bounds, Rect};

/// True if `rect` overlaps any of `others`
pub fn hits_any<'a, T, I>(rect: &Rect, others: I) -> bool
where
    T: Bounds + 'a,
    I: IntoIterator<Item = &'a T>,
{
    others.into_iter().any(|o| rect.intersects(&o.bounds()))
}

/// Remove every item that `rect` overlaps, returning how many went
pub fn remove_hits<T: Bounds>(rect: &Rect, items: &mut Vec<T>) -> usize {
    let before = items.len();
    items.retain(|item| !rect.intersects(&item.bounds()));
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_any() {
        let walls = vec![Rect::new(0, 0, 20, 500), Rect::new(680, 0, 20, 500)];
        assert!(hits_any(&Rect::new(15, 100, 10, 10), &walls));
        assert!(!hits_any(&Rect::new(20, 100, 10, 10), &walls));
        assert!(!hits_any(&Rect::new(20, 100, 10, 10), &Vec::<Rect>::new()));
    }

    #[test]
    fn test_remove_hits() {
        let mut items = vec![
            Rect::new(0, 0, 10, 10),
            Rect::new(100, 100, 10, 10),
            Rect::new(5, 5, 10, 10),
        ];
        assert_eq!(remove_hits(&Rect::new(0, 0, 8, 8), &mut items), 2);
        assert_eq!(items, vec![Rect::new(100, 100, 10, 10)]);
        assert_eq!(remove_hits(&Rect::new(0, 0, 8, 8), &mut items), 0);
    }
}
