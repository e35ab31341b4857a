use grid::Snapshot;

pub trait Renderer {
    fn render(&self, problem: usize, snapshot: &Snapshot) -> String;
}

/// Plain-text frame: one line per row, top row first, then a caption.
pub struct TextRenderer {
    pub open: char,
    pub closed: char,
}

impl Default for TextRenderer {
    fn default() -> TextRenderer {
        TextRenderer { open: '#', closed: '.' }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, problem: usize, snapshot: &Snapshot) -> String {
        let size = snapshot.size();
        let mut out = String::with_capacity((size + 1) * size + 40);
        for row in snapshot.sites().chunks(size) {
            for &open in row {
                out.push(if open { self.open } else { self.closed });
            }
            out.push('\n');
        }
        out.push_str(&format!("Problem {}: Percolates - {}", problem, snapshot.percolates()));
        out
    }
}
