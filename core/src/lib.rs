//! Palette handling for the Xosera video controller: VDI colour requests
//! in, 4-bit-per-channel CLUT register words out.

pub mod xosera;
