//! Lightbox navigation over the gallery.

use crate::content::GalleryItem;

/// Which gallery item, if any, is shown full-screen.
///
/// Navigation wraps around in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open at `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some((current + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some(if current == 0 { self.len - 1 } else { current - 1 });
        }
    }

    /// The selected item from `items`.
    pub fn current<'a>(&self, items: &'a [GalleryItem]) -> Option<&'a GalleryItem> {
        self.selected.and_then(|index| items.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(2);
        lightbox.next();
        assert_eq!(lightbox.selected(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.selected(), Some(2));
        lightbox.prev();
        assert_eq!(lightbox.selected(), Some(1));
    }

    #[test]
    fn test_closed_lightbox_ignores_navigation() {
        let mut lightbox = Lightbox::new(3);
        lightbox.next();
        lightbox.prev();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut lightbox = Lightbox::new(2);
        lightbox.open(5);
        assert!(!lightbox.is_open());

        let mut empty = Lightbox::new(0);
        empty.open(0);
        assert!(!empty.is_open());
    }

    #[test]
    fn test_current_item() {
        let items = crate::content::default_gallery();
        let mut lightbox = Lightbox::new(items.len());
        assert!(lightbox.current(&items).is_none());

        lightbox.open(1);
        assert_eq!(lightbox.current(&items).map(|item| item.id), Some(items[1].id));
        lightbox.close();
        assert!(lightbox.current(&items).is_none());
    }
}
