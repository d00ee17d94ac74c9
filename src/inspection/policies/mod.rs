mod risk_palette;

pub use risk_palette::RiskPalette;
