//! The two windowing policies over ranked results. Both only truncate; the
//! rank order underneath is never touched.

/// Flat "show more" reveal over the combined ranked list.
#[derive(Clone, Copy, Debug)]
pub struct RevealWindow {
	initial: usize,
	step: usize,
	visible: usize,
}
impl RevealWindow {
	pub fn new(initial: usize, step: usize) -> Self {
		Self { initial, step, visible: initial }
	}

	/// Reveals one more step. Uncapped; [`end`](Self::end) clamps at render
	/// time.
	pub fn show_more(&mut self) {
		self.visible = self.visible.saturating_add(self.step);
	}

	pub fn reset(&mut self) {
		self.visible = self.initial;
	}

	/// Exclusive end of the visible slice.
	pub fn end(&self, total: usize) -> usize {
		self.visible.min(total)
	}

	pub fn is_exhausted(&self, total: usize) -> bool {
		self.visible >= total
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageDirection {
	Backward,
	Forward,
}

/// Fixed-size sliding page over one source group.
#[derive(Clone, Copy, Debug)]
pub struct SlidingWindow {
	offset: usize,
	page_size: usize,
}
impl SlidingWindow {
	pub fn new(page_size: usize) -> Self {
		Self { offset: 0, page_size }
	}

	/// `offset' = clamp(offset ± page_size, 0, max(0, total - page_size))`.
	///
	/// Exactly this clamp, not a modulo wrap: it pins the last page against
	/// the end of the group, so the final step may overlap the previous page
	/// when `total` is not a multiple of `page_size`.
	pub fn page(&mut self, direction: PageDirection, total: usize) {
		let limit = total.saturating_sub(self.page_size);

		self.offset = match direction {
			PageDirection::Backward => self.offset.saturating_sub(self.page_size),
			PageDirection::Forward => self.offset.saturating_add(self.page_size),
		}
		.min(limit);
	}

	pub fn can_back(&self) -> bool {
		self.offset > 0
	}

	pub fn can_forward(&self, total: usize) -> bool {
		self.offset + self.page_size < total
	}

	pub fn offset(&self) -> usize {
		self.offset
	}

	/// The currently visible index range, clamped to the group.
	pub fn range(&self, total: usize) -> std::ops::Range<usize> {
		let start = self.offset.min(total);

		start..(self.offset.saturating_add(self.page_size)).min(total)
	}
}
