//! Declarative frame composition.
//!
//! A notification is usually a short sequence of frames where some frames only
//! appear under a condition, or one of two frames is picked, or a frame is
//! shown several times. [`Composer`] accumulates those pieces in declaration
//! order and [`compose`] runs a composition block over a fresh one:
//!
//! ```
//! use lametric_model::{compose, Either, Frame};
//!
//! let raining = true;
//! let frames = compose(|c| {
//!     c.frame(Frame::text("Weather"))
//!         .when(raining, || Frame::text("Take an umbrella"))
//!         .either(raining, Frame::chart(vec![3, 5, 8]), Frame::text("Dry"))
//!         .repeat(Frame::text("!"), 2)?;
//!     Ok(())
//! })?;
//! assert_eq!(frames.len(), 5);
//! # Ok::<(), lametric_model::ModelError>(())
//! ```
//!
//! Everything here is in memory; nothing talks to a device.

use crate::error::{ModelError, Result};
use crate::frame::Frame;

/// Anything that yields zero or more frames.
pub trait IntoFrames {
    /// Append the produced frames to `out`, in order.
    fn extend_frames(self, out: &mut Vec<Frame>);

    /// Collect the produced frames.
    fn into_frames(self) -> Vec<Frame>
    where
        Self: Sized,
    {
        let mut frames = Vec::new();
        self.extend_frames(&mut frames);
        frames
    }
}

impl IntoFrames for Frame {
    fn extend_frames(self, out: &mut Vec<Frame>) {
        out.push(self);
    }
}

/// The empty producer.
impl IntoFrames for () {
    fn extend_frames(self, _out: &mut Vec<Frame>) {}
}

impl IntoFrames for Vec<Frame> {
    fn extend_frames(self, out: &mut Vec<Frame>) {
        out.extend(self);
    }
}

impl<const N: usize> IntoFrames for [Frame; N] {
    fn extend_frames(self, out: &mut Vec<Frame>) {
        out.extend(self);
    }
}

/// Absent contributes nothing.
impl<P: IntoFrames> IntoFrames for Option<P> {
    fn extend_frames(self, out: &mut Vec<Frame>) {
        if let Some(producer) = self {
            producer.extend_frames(out);
        }
    }
}

/// One of two producers, already chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The first alternative.
    Left(L),
    /// The second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// `Left(left)` if `condition` holds, else `Right(right)`.
    pub fn choose(condition: bool, left: L, right: R) -> Self {
        if condition {
            Either::Left(left)
        } else {
            Either::Right(right)
        }
    }
}

impl<L: IntoFrames, R: IntoFrames> IntoFrames for Either<L, R> {
    fn extend_frames(self, out: &mut Vec<Frame>) {
        match self {
            Either::Left(left) => left.extend_frames(out),
            Either::Right(right) => right.extend_frames(out),
        }
    }
}

/// Ordered frame accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    frames: Vec<Frame>,
}

impl Composer {
    /// Start an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append everything `producer` yields.
    pub fn frame(&mut self, producer: impl IntoFrames) -> &mut Self {
        producer.extend_frames(&mut self.frames);
        self
    }

    /// Append the wrapped producer if present.
    pub fn optional<P: IntoFrames>(&mut self, producer: Option<P>) -> &mut Self {
        self.frame(producer)
    }

    /// Append the producer built by `build` when `condition` holds.
    pub fn when<P, F>(&mut self, condition: bool, build: F) -> &mut Self
    where
        P: IntoFrames,
        F: FnOnce() -> P,
    {
        self.frame(condition.then(build))
    }

    /// Append `left` if `condition` holds, else `right`.
    pub fn either<L, R>(&mut self, condition: bool, left: L, right: R) -> &mut Self
    where
        L: IntoFrames,
        R: IntoFrames,
    {
        self.frame(Either::choose(condition, left, right))
    }

    /// Append `count` copies of the single frame `producer` yields.
    ///
    /// Fails with [`ModelError::NothingToRepeat`] when the producer is empty
    /// and [`ModelError::RepeatNeedsSingleFrame`] when it yields several
    /// frames. On failure nothing is appended.
    pub fn repeat(&mut self, producer: impl IntoFrames, count: usize) -> Result<&mut Self> {
        let mut produced = producer.into_frames();
        let frame = match produced.len() {
            0 => return Err(ModelError::NothingToRepeat),
            1 => produced.remove(0),
            frames => return Err(ModelError::RepeatNeedsSingleFrame { frames }),
        };
        self.frames.extend(std::iter::repeat(frame).take(count));
        Ok(self)
    }

    /// Number of frames so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Take the flattened frame list.
    pub fn finish(self) -> Vec<Frame> {
        self.frames
    }
}

impl IntoFrames for Composer {
    fn extend_frames(self, out: &mut Vec<Frame>) {
        out.extend(self.frames);
    }
}

/// Run a composition block and return the flattened frames.
pub fn compose<F>(block: F) -> Result<Vec<Frame>>
where
    F: FnOnce(&mut Composer) -> Result<()>,
{
    let mut composer = Composer::new();
    block(&mut composer)?;
    Ok(composer.finish())
}
