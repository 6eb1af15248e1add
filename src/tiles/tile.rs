//! Tile entity.
//!
//! A `Tile` is one face-down/face-up piece on the board. Its content and
//! partner are fixed at deck construction; only `visible` changes, and
//! only through the game state machine.

use serde::Serialize;

use super::content::Content;
use crate::core::TileId;

/// One game piece.
///
/// `partner` is a non-owning link expressed as an id into the same deck.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tile {
    id: TileId,
    content: Content,
    partner: TileId,
    visible: bool,
}

impl Tile {
    pub(crate) fn new(id: TileId, content: Content, partner: TileId) -> Self {
        Self {
            id,
            content,
            partner,
            visible: false,
        }
    }

    /// This tile's position in the deck.
    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// The face shown when revealed.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Shorthand for `content().text`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.content.text
    }

    /// The tile this one pairs with.
    #[must_use]
    pub fn partner(&self) -> TileId {
        self.partner
    }

    /// Is the tile face-up?
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn relocate(&mut self, id: TileId, partner: TileId) {
        self.id = id;
        self.partner = partner;
    }
}
