//! Retained SVG document builder.
//!
//! Shapes accumulate in paint order and serialize once. Later shapes draw
//! over earlier ones, so insertion order is part of the output contract.

use anyhow::Result;
use std::fmt;
use std::path::Path;

/// Geometry attribute value, either user units or a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Units(f64),
    Percent(f64),
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::Units(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Units(value) => write!(f, "{value}"),
            Length::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// Presentation attributes. Unset fields are omitted from the markup.
#[derive(Debug, Clone, Default)]
pub struct ShapeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub transform: Option<String>,
}

impl ShapeStyle {
    fn write_attrs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{width}\"")?;
        }
        if let Some(opacity) = self.opacity {
            write!(f, " opacity=\"{opacity}\"")?;
        }
        if let Some(transform) = &self.transform {
            write!(f, " transform=\"{transform}\"")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum Shape {
    Rect {
        x: Length,
        y: Length,
        width: Length,
        height: Length,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Path {
        d: String,
    },
    Polyline {
        points: String,
    },
    Group {
        children: Vec<Element>,
    },
}

/// One drawing element: a shape plus its presentation attributes.
#[derive(Debug, Clone)]
pub struct Element {
    pub shape: Shape,
    pub style: ShapeStyle,
}

impl Element {
    /// Bare rect with no styling of its own, for use inside a group.
    pub fn rect(
        x: impl Into<Length>,
        y: impl Into<Length>,
        width: impl Into<Length>,
        height: impl Into<Length>,
    ) -> Self {
        Element {
            shape: Shape::Rect {
                x: x.into(),
                y: y.into(),
                width: width.into(),
                height: height.into(),
            },
            style: ShapeStyle::default(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\""
                )?;
                self.style.write_attrs(f)?;
                write!(f, "/>")
            }
            Shape::Circle { cx, cy, r } => {
                write!(f, "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"")?;
                self.style.write_attrs(f)?;
                write!(f, "/>")
            }
            Shape::Path { d } => {
                write!(f, "<path d=\"{d}\"")?;
                self.style.write_attrs(f)?;
                write!(f, "/>")
            }
            Shape::Polyline { points } => {
                write!(f, "<polyline points=\"{points}\"")?;
                self.style.write_attrs(f)?;
                write!(f, "/>")
            }
            Shape::Group { children } => {
                write!(f, "<g")?;
                self.style.write_attrs(f)?;
                write!(f, ">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</g>")
            }
        }
    }
}

/// The pattern document: declared size plus shapes in insertion order.
#[derive(Debug, Clone)]
pub struct Svg {
    pub width: f64,
    pub height: f64,
    elements: Vec<Element>,
}

impl Svg {
    pub fn new() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            elements: Vec::new(),
        }
    }

    pub fn rect(
        &mut self,
        x: impl Into<Length>,
        y: impl Into<Length>,
        width: impl Into<Length>,
        height: impl Into<Length>,
        style: ShapeStyle,
    ) {
        self.elements.push(Element {
            shape: Shape::Rect {
                x: x.into(),
                y: y.into(),
                width: width.into(),
                height: height.into(),
            },
            style,
        });
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, style: ShapeStyle) {
        self.elements.push(Element {
            shape: Shape::Circle { cx, cy, r },
            style,
        });
    }

    pub fn path(&mut self, d: String, style: ShapeStyle) {
        self.elements.push(Element {
            shape: Shape::Path { d },
            style,
        });
    }

    pub fn polyline(&mut self, points: String, style: ShapeStyle) {
        self.elements.push(Element {
            shape: Shape::Polyline { points },
            style,
        });
    }

    pub fn group(&mut self, children: Vec<Element>, style: ShapeStyle) {
        self.elements.push(Element {
            shape: Shape::Group { children },
            style,
        });
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl Default for Svg {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
            self.width, self.height
        )?;
        for element in &self.elements {
            write!(f, "{element}")?;
        }
        write!(f, "</svg>")
    }
}

/// Write serialized markup (or its base64 form) to a file, or stdout when no
/// path is given.
pub fn write_output_text(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
        }
        None => {
            print!("{text}");
        }
    }
    Ok(())
}

/// Rasterize markup and write it as a PNG. The document's declared size
/// becomes the pixel size.
#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}
