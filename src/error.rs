//! Types for error handling go here.
use std::io::Error as IOError;

quick_error! {
    /// Error type for all error variants originated by decoding an NRRD file.
    #[derive(Debug)]
    pub enum NrrdError {
        /// The first header line does not start with `NRRD`.
        InvalidMagic {
            display("Invalid NRRD magic")
        }
        /// No header/body separator, or the header is not valid text.
        MalformedHeader {
            display("Malformed NRRD header")
        }
        /// The `sizes` field is absent or holds no integers.
        MissingDimensions {
            display("Missing or empty `sizes` field")
        }
        /// The declared volume does not fit in addressable memory.
        DimensionOverflow {
            display("Volume dimensions overflow addressable memory")
        }
        /// The `encoding` field names an encoding other than raw or gzip.
        UnsupportedEncoding(name: String) {
            display("Unsupported encoding `{}`", name)
        }
        /// The `byte skip` field is not an integer of at least -1.
        InvalidByteSkip(value: String) {
            display("Invalid byte skip `{}`", value)
        }
        /// The gzip member ends before its framing or trailer.
        TruncatedCompressedData {
            display("Truncated gzip data")
        }
        /// The inflate primitive failed or produced no data.
        DecompressionFailed {
            display("Decompression failed")
        }
        /// Attempted to access a volume with coordinates of the wrong rank.
        IncorrectVolumeDimensionality(expected: usize, got: usize) {
            display("Expected {} coordinates, got {}", expected, got)
        }
        /// Attempted to read volume outside boundaries.
        OutOfBounds(coords: Vec<usize>) {
            display("Out of bounds access to volume: {:?}", coords)
        }
        /// The volume shape could not be adopted by an external array type.
        IncompatibleShape {
            display("Volume shape is incompatible with the sample buffer")
        }
        /// I/O Error
        Io(err: IOError) {
            from()
            source(err)
            display("I/O error: {}", err)
        }
    }
}

quick_error! {
    /// Error type for failures while rendering a volume preview.
    #[derive(Debug)]
    pub enum RenderError {
        /// Only 2D and 3D volumes can be previewed.
        UnsupportedDimensionality(rank: usize) {
            display("Cannot render a volume with {} dimensions", rank)
        }
        /// No panel could be rasterized.
        RenderFailed {
            display("Failed to render preview")
        }
        /// A palette needs at least one colour.
        EmptyPalette {
            display("Palette has no colours")
        }
    }
}

/// Alias type for results originated from this crate's decoding stage.
pub type Result<T> = ::std::result::Result<T, NrrdError>;
