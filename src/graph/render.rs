use crate::graph::*;

/// Layout knobs for the textual rendering of graphs.
///
/// * `cell_width`: width of each matrix cell, header included.
/// * `indent`: indentation of each vertex line of a list rendering.
/// * `collapse_width`: list renderings shorter than this are collapsed onto one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub cell_width: usize,
    pub indent: usize,
    pub collapse_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_width: 2,
            indent: 2,
            collapse_width: 70,
        }
    }
}

impl RenderOptions {
    pub fn cell_width(mut self, width: usize) -> Self {
        self.cell_width = width;
        self
    }

    pub fn indent(mut self, step: usize) -> Self {
        self.indent = step;
        self
    }

    pub fn collapse_width(mut self, width: usize) -> Self {
        self.collapse_width = width;
        self
    }
}

/// A `Display` adapter rendering a graph with the given options.
pub struct GraphRender<'a, G> {
    graph: &'a G,
    options: RenderOptions,
}

impl<'a, G> GraphRender<'a, G> {
    pub fn new(graph: &'a G, options: RenderOptions) -> Self {
        Self { graph, options }
    }
}

pub trait Render
where
    Self: Sized,
{
    fn render(&self, options: RenderOptions) -> GraphRender<'_, Self> {
        GraphRender::new(self, options)
    }
}

impl Render for WeightedDigraph {}
impl Render for LabeledGraph {}

fn write_cells<I, T>(f: &mut std::fmt::Formatter<'_>, cells: I, width: usize) -> std::fmt::Result
where
    I: Iterator<Item = T>,
    T: std::fmt::Display,
{
    for (idx, cell) in cells.enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{:>width$}", cell, width = width)?;
    }
    writeln!(f)
}

impl<'a> std::fmt::Display for GraphRender<'a, WeightedDigraph> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.graph.vertex_size();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }
        let w = self.options.cell_width;
        writeln!(f, "GRAPH ({} vertices):", n)?;
        write!(f, "{:width$}|", "", width = w + 1)?;
        write_cells(f, 0..n, w)?;
        writeln!(f, "{}", "-".repeat(n * (w + 1) + w + 1))?;
        for v in self.graph.iter_vertices() {
            write!(f, "{:>width$} |", v.to_raw(), width = w)?;
            write_cells(f, self.graph.row(v).unwrap_or_default().iter(), w)?;
        }
        Ok(())
    }
}

impl<'a> std::fmt::Display for GraphRender<'a, LabeledGraph> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .graph
            .iter_labels()
            .map(|v| {
                let neighbors: Vec<String> = self
                    .graph
                    .neighbors(v)
                    .into_iter()
                    .map(|n| format!("'{}'", n))
                    .collect();
                format!("{}: [{}]", v, neighbors.join(", "))
            })
            .collect();
        let sep = format!("\n{}", " ".repeat(self.options.indent));
        let out = lines.join(&sep);
        if out.chars().count() < self.options.collapse_width {
            write!(f, "GRAPH: {{{}}}", lines.join(", "))
        } else {
            write!(f, "GRAPH: {{{}{}}}", sep, out)
        }
    }
}

impl std::fmt::Display for WeightedDigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(RenderOptions::default()))
    }
}

impl std::fmt::Display for LabeledGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(RenderOptions::default()))
    }
}
