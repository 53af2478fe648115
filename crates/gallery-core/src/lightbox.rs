//! Full-screen image carousel state

/// Index after `index`, wrapping to the start
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Index before `index`, wrapping to the end
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - 1) % len
}

/// An open lightbox over one column's images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    index: usize,
}

impl Lightbox {
    /// Open at `index`; `None` when there is nothing to show.
    ///
    /// Out-of-range indexes are clamped to the last image.
    pub fn open(images: Vec<String>, index: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let index = index.min(images.len() - 1);
        Some(Self { images, index })
    }

    pub fn next(&mut self) {
        self.index = wrap_next(self.index, self.images.len());
    }

    pub fn prev(&mut self) {
        self.index = wrap_prev(self.index, self.images.len());
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }
}
