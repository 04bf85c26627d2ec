pub struct Order {
    #[cfg_attr(any(), builder)]
    id: u64,
    #[cfg_attr(any(), builder)]
    symbol: String,
    #[cfg_attr(any(), builder(opt))]
    note: Option<String>,
}

pub struct Quote {
    bid: f64,
    ask: f64,
}
