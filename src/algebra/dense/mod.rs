// Column major dense matrix used as the expanded form of the
// symmetric containers.
mod core;
