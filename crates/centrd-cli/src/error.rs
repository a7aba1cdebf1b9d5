/// Errors that end a CLI invocation.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[display("terminal I/O failed: {_0}")]
    Io(std::io::Error),
    /// A seed given on the command line was malformed.
    #[display("invalid seed: {_0}")]
    Seed(centrd_generator::ParseSeedError),
    /// A dot lies outside the requested grid.
    #[display("dot {dot} lies outside of the {grid_size}x{grid_size} grid")]
    #[from(ignore)]
    DotOutsideGrid {
        /// The offending dot.
        #[error(not(source))]
        dot: centrd_core::Position,
        /// Side length of the grid.
        grid_size: u8,
    },
}
