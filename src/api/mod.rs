pub mod overlay;
pub mod series_data;

pub use overlay::{HostContext, RectangleOverlay};
pub use series_data::{
    AreaData, BarData, BaselineData, CandlestickData, CustomData, LineData, OhlcData,
    RectangleData, SeriesDataItem, SeriesType, SingleValueData, project_plot_row,
};
