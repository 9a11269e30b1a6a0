/// Upload/display controller
///
/// Tracks the currently selected image and sequences the asynchronous
/// decodes that produce it. Each decode request and each clear advances a
/// ticket; a finished decode is applied only when its ticket is still the
/// latest one, so a slow first file can never overwrite a newer choice.

/// Sequence number identifying one decode request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// The selected image, or nothing
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedImage<P> {
    Empty,
    Loaded(P),
}

/// Work the caller must perform to finish a selection
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeRequest<F> {
    pub ticket: Ticket,
    pub file: F,
}

/// Outcome of feeding a finished decode back into the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<E> {
    /// The payload is now the selected image
    Loaded,
    /// A newer selection or a clear superseded this decode
    Stale,
    /// The decode failed; the previous state is kept
    Failed(E),
}

/// State holder for the selected image
#[derive(Debug)]
pub struct Selection<P> {
    current: SelectedImage<P>,
    latest: Ticket,
    pending: bool,
}

impl<P> Default for Selection<P> {
    fn default() -> Self {
        Self {
            current: SelectedImage::Empty,
            latest: Ticket(0),
            pending: false,
        }
    }
}

impl<P> Selection<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected image, if one is loaded
    pub fn current(&self) -> Option<&P> {
        match &self.current {
            SelectedImage::Loaded(payload) => Some(payload),
            SelectedImage::Empty => None,
        }
    }

    pub fn state(&self) -> &SelectedImage<P> {
        &self.current
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.current, SelectedImage::Loaded(_))
    }

    /// Whether a decode for the latest selection is still running
    pub fn is_decoding(&self) -> bool {
        self.pending
    }

    /// React to the user choosing a file (or cancelling the choice)
    ///
    /// With a file, returns the decode the caller should start. The current
    /// image stays visible until that decode completes. Without a file this
    /// is the same as [`Selection::clear`].
    pub fn select_file<F>(&mut self, file: Option<F>) -> Option<DecodeRequest<F>> {
        let Some(file) = file else {
            self.clear();
            return None;
        };

        let ticket = self.advance();
        self.pending = true;
        Some(DecodeRequest { ticket, file })
    }

    /// Drop the selected image immediately
    ///
    /// Any decode still in flight becomes stale. Returns whether an image
    /// was actually removed.
    pub fn clear(&mut self) -> bool {
        self.advance();
        self.pending = false;
        let was_loaded = self.is_loaded();
        self.current = SelectedImage::Empty;
        was_loaded
    }

    /// Apply a finished decode
    pub fn complete<E>(&mut self, ticket: Ticket, result: Result<P, E>) -> Completion<E> {
        if ticket != self.latest {
            return Completion::Stale;
        }

        self.pending = false;
        match result {
            Ok(payload) => {
                self.current = SelectedImage::Loaded(payload);
                Completion::Loaded
            }
            Err(err) => Completion::Failed(err),
        }
    }

    fn advance(&mut self) -> Ticket {
        self.latest = Ticket(self.latest.0 + 1);
        self.latest
    }
}
