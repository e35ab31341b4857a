use data::{Direction, Site};
use disjoint_set::DisjointSet;
use error::{PercolationError, Result};
use random::RandomSource;
use serde_json::Value;

/// An n-by-n field of sites backed by a forest of `n*n + 2` identifiers.
/// The two extra identifiers stand for "above the top row" and "below the
/// bottom row", so percolation is a single same-set query.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    sites: Vec<bool>,
    open_count: usize,
    forest: DisjointSet,
    virtual_top: usize,
    virtual_bottom: usize,
}

/// Read-only copy of a grid's state, for renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    size: usize,
    sites: Vec<bool>,
    percolates: bool,
}

impl Snapshot {
    /// `sites` is row-major and must hold exactly `size * size` flags.
    pub fn new(size: usize, sites: Vec<bool>, percolates: bool) -> Result<Snapshot> {
        match size.checked_mul(size) {
            Some(squared) if size > 0 && squared == sites.len() => Ok(Snapshot {
                size,
                sites,
                percolates,
            }),
            _ => Err(PercolationError::InvalidSize(size)),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sites(&self) -> &[bool] {
        &self.sites
    }

    pub fn percolates(&self) -> bool {
        self.percolates
    }

    /// `None` outside the grid.
    pub fn is_open(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.size && col < self.size {
            Some(self.sites[row * self.size + col])
        } else {
            None
        }
    }

    pub fn open_count(&self) -> usize {
        self.sites.iter().filter(|&&open| open).count()
    }

    pub fn to_json(&self) -> Value {
        let rows: Vec<Vec<u8>> = self.sites
            .chunks(self.size)
            .map(|row| row.iter().map(|&open| open as u8).collect())
            .collect();
        json!({
            "size": self.size,
            "open": self.open_count(),
            "percolates": self.percolates,
            "sites": rows,
        })
    }
}

impl Grid {
    pub fn new(size: usize) -> Result<Grid> {
        let squared = match size.checked_mul(size) {
            Some(squared) if size > 0 && squared.checked_add(2).is_some() => squared,
            _ => return Err(PercolationError::InvalidSize(size)),
        };
        Ok(Grid {
            size,
            sites: vec![false; squared],
            open_count: 0,
            forest: DisjointSet::make_singletons(squared + 2)?,
            virtual_top: squared,
            virtual_bottom: squared + 1,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    pub fn contains(&self, site: Site) -> bool {
        let n = self.size as isize;
        site.row >= 0 && site.row < n && site.col >= 0 && site.col < n
    }

    /// Forest identifier of a site: `row * n + col`.
    pub fn index(&self, site: Site) -> Result<usize> {
        if !self.contains(site) {
            return Err(PercolationError::SiteOutOfRange {
                row: site.row,
                col: site.col,
                size: self.size,
            });
        }
        Ok(site.row as usize * self.size + site.col as usize)
    }

    pub fn is_open(&self, site: Site) -> Result<bool> {
        let idx = self.index(site)?;
        Ok(self.sites[idx])
    }

    /// Opens `site` and joins it to every open neighbour, and to the virtual
    /// top/bottom when it sits on the first/last row. Opening twice is a no-op.
    pub fn open(&mut self, site: Site) -> Result<()> {
        let idx = self.index(site)?;
        if self.sites[idx] {
            return Ok(());
        }
        self.sites[idx] = true;
        self.open_count += 1;
        debug!("open ({}, {}) -> {}", site.row, site.col, idx);

        if site.row == 0 {
            self.forest.union(self.virtual_top, idx)?;
        }
        if site.row as usize == self.size - 1 {
            self.forest.union(idx, self.virtual_bottom)?;
        }

        for &dir in Direction::adjacent_directions().iter() {
            let next = site.step(dir);
            if !self.contains(next) {
                continue;
            }
            let next_idx = self.index(next)?;
            if self.sites[next_idx] {
                self.forest.union(idx, next_idx)?;
            }
        }
        Ok(())
    }

    pub fn percolates(&self) -> bool {
        let joined = self.forest.connected(self.virtual_top, self.virtual_bottom);
        debug_assert!(joined.is_ok(), "virtual sites outside the forest: {:?}", joined);
        joined.unwrap_or(false)
    }

    /// Scans sites in row-major order, drawing once per site, and opens the
    /// site when the draw is below `probability`.
    pub fn open_fraction<R: RandomSource + ?Sized>(&mut self, probability: f64, source: &mut R) -> Result<()> {
        if !(probability >= 0.0 && probability <= 1.0) {
            return Err(PercolationError::InvalidProbability(probability));
        }
        for row in 0..self.size {
            for col in 0..self.size {
                if source.uniform() < probability {
                    self.open(Site::new(row as isize, col as isize))?;
                }
            }
        }
        Ok(())
    }

    /// Closes every site and forgets all unions.
    pub fn reset(&mut self) -> Result<()> {
        self.forest = DisjointSet::make_singletons(self.sites.len() + 2)?;
        for open in self.sites.iter_mut() {
            *open = false;
        }
        self.open_count = 0;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            sites: self.sites.clone(),
            percolates: self.percolates(),
        }
    }
}
