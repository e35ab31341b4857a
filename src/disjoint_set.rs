// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use error::{PercolationError, Result};

/// Weighted quick-union over the identifiers `0..size`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	size: usize,
	parent: Vec<usize>,
	weight: Vec<usize>,
	components: usize,
}

impl DisjointSet {
	pub fn make_singletons(size: usize) -> Result<DisjointSet> {
		if size == 0 {
			return Err(PercolationError::InvalidSize(size));
		}
		Ok(DisjointSet {
			size,
			parent: (0..size).collect(),
			weight: vec![1; size],
			components: size,
		})
	}

	pub fn len(&self) -> usize {
		self.size
	}

	/// Number of disjoint sets currently in the forest.
	pub fn components(&self) -> usize {
		self.components
	}

	fn check(&self, x: usize) -> Result<()> {
		if x < self.size {
			Ok(())
		} else {
			Err(PercolationError::OutOfRange { index: x, bound: self.size })
		}
	}

	/// Root of the tree holding `x`. Union by size keeps trees O(log n) deep,
	/// so this walk does not need to rewrite anything.
	pub fn find(&self, x: usize) -> Result<usize> {
		self.check(x)?;
		let mut node = x;
		while self.parent[node] != node {
			node = self.parent[node];
		}
		Ok(node)
	}

	// path halving: every visited node skips to its grandparent
	fn find_compress(&mut self, x: usize) -> usize {
		let mut node = x;
		while self.parent[node] != node {
			let grandparent = self.parent[self.parent[node]];
			self.parent[node] = grandparent;
			node = grandparent;
		}
		node
	}

	/// Number of identifiers in the set holding `x`.
	pub fn set_size(&self, x: usize) -> Result<usize> {
		let root = self.find(x)?;
		Ok(self.weight[root])
	}

	pub fn connected(&self, x: usize, y: usize) -> Result<bool> {
		Ok(self.find(x)? == self.find(y)?)
	}

	/// Merges the sets holding `x` and `y`. The lighter root is hung under the
	/// heavier one; on a tie `y`'s root goes under `x`'s.
	pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
		self.check(x)?;
		self.check(y)?;
		let x_root = self.find_compress(x);
		let y_root = self.find_compress(y);
		if x_root == y_root {
			return Ok(());
		}
		let (root, child) = if self.weight[x_root] >= self.weight[y_root] {
			(x_root, y_root)
		} else {
			(y_root, x_root)
		};
		self.parent[child] = root;
		self.weight[root] += self.weight[child];
		self.components -= 1;
		Ok(())
	}
}
