// 領域層：純資料模型與介面，只依賴 std/serde

pub mod model;
pub mod ports;
