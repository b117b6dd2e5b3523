//! Static table contents for the pages without a live feed.

use chrono::NaiveDateTime;

use crate::domain::{
    Attribution, Holding, Impact, MarketDatum, MetricCard, NewsItem, ResearchNote, RiskExposure,
    RiskStatus, Side, SocialMention, Transaction, TIMESTAMP_FORMAT,
};

/// Symbol and name of the 20 coins in the overview table, in rank order.
pub const COINS: [(&str, &str); 20] = [
    ("BTC", "Bitcoin"),
    ("ETH", "Ethereum"),
    ("BNB", "Binance Coin"),
    ("ADA", "Cardano"),
    ("SOL", "Solana"),
    ("XRP", "Ripple"),
    ("DOT", "Polkadot"),
    ("AVAX", "Avalanche"),
    ("MATIC", "Polygon"),
    ("LINK", "Chainlink"),
    ("UNI", "Uniswap"),
    ("LTC", "Litecoin"),
    ("ALGO", "Algorand"),
    ("VET", "VeChain"),
    ("ICP", "Internet Computer"),
    ("FIL", "Filecoin"),
    ("TRX", "TRON"),
    ("ETC", "Ethereum Classic"),
    ("XLM", "Stellar"),
    ("THETA", "Theta Network"),
];

/// The live ticker follows the first ten coins.
pub fn ticker_symbols() -> &'static [(&'static str, &'static str)] {
    &COINS[..10]
}

#[allow(clippy::too_many_arguments)]
fn market(
    id: &str,
    symbol: &str,
    name: &str,
    price: f64,
    change_24h: f64,
    volume: f64,
    market_cap: f64,
    rsi: f64,
    macd: &str,
    sentiment: f64,
    correlation: f64,
    volatility: &str,
    signal: &str,
    confidence: f64,
) -> MarketDatum {
    MarketDatum {
        id: id.into(),
        symbol: symbol.into(),
        name: name.into(),
        price,
        change_24h,
        volume,
        market_cap,
        rsi,
        macd: macd.into(),
        sentiment,
        correlation,
        volatility: volatility.into(),
        signal: signal.into(),
        confidence,
    }
}

pub fn market_data() -> Vec<MarketDatum> {
    vec![
        market("1", "BTC", "Bitcoin", 43_250.00, 2.4, 28.5e9, 847e9, 68.5, "Bullish", 74.0, 1.00, "Medium", "Buy", 85.0),
        market("2", "ETH", "Ethereum", 2_680.50, -1.2, 15.2e9, 322e9, 45.2, "Bearish", 68.0, 0.73, "High", "Hold", 72.0),
        market("3", "ADA", "Cardano", 0.485, 5.8, 890e6, 17.2e9, 72.1, "Bullish", 81.0, 0.65, "High", "Buy", 78.0),
        market("4", "DOT", "Polkadot", 7.23, -3.1, 420e6, 9.8e9, 38.7, "Bearish", 52.0, 0.58, "Medium", "Sell", 69.0),
        market("5", "SOL", "Solana", 98.45, 8.2, 2.1e9, 42.5e9, 78.9, "Bullish", 89.0, 0.71, "Very High", "Buy", 91.0),
        market("6", "MATIC", "Polygon", 0.89, 1.7, 680e6, 8.2e9, 55.3, "Neutral", 63.0, 0.62, "Medium", "Hold", 65.0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn holding(
    id: &str,
    asset: &str,
    symbol: &str,
    value: f64,
    quantity: f64,
    weight: f64,
    target: f64,
    drift: f64,
    day_change: f64,
    recommendation: &str,
) -> Holding {
    Holding {
        id: id.into(),
        asset: asset.into(),
        symbol: symbol.into(),
        kind: "cryptocurrency".into(),
        value,
        quantity,
        weight,
        target,
        drift,
        day_change,
        recommendation: recommendation.into(),
    }
}

pub fn holdings() -> Vec<Holding> {
    vec![
        holding("btc-1", "Bitcoin", "BTC", 1_041_250.0, 24.125, 42.5, 40.0, 2.5, -1.2, "Sell"),
        holding("eth-1", "Ethereum", "ETH", 693_350.0, 259.38, 28.3, 30.0, -1.7, 2.4, "Buy"),
        holding("bnb-1", "Binance Coin", "BNB", 296_450.0, 1_247.8, 12.1, 10.0, 2.1, -0.8, "Sell"),
        holding("ada-1", "Cardano", "ADA", 213_150.0, 532_875.0, 8.7, 8.0, 0.7, 1.5, "Hold"),
        holding("sol-1", "Solana", "SOL", 127_400.0, 1_456.8, 5.2, 7.0, -1.8, 3.2, "Buy"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn exposure(
    id: &str,
    asset: &str,
    kind: &str,
    position: f64,
    beta: f64,
    volatility: f64,
    correlation: f64,
    stress_test: f64,
    status: RiskStatus,
) -> RiskExposure {
    RiskExposure {
        id: id.into(),
        asset: asset.into(),
        kind: kind.into(),
        position,
        beta,
        volatility,
        correlation,
        stress_test,
        status,
    }
}

pub fn risk_breakdown() -> Vec<RiskExposure> {
    use RiskStatus::*;
    vec![
        exposure("1", "BTC-USD", "Spot", 2_450_000.0, 1.2, 24.5, 0.85, -15.2, Warning),
        exposure("2", "ETH-USD", "Futures", 1_850_000.0, 1.4, 28.1, 0.89, -18.7, Critical),
        exposure("3", "ADA-USD", "Spot", 890_000.0, 0.9, 32.3, 0.72, -12.4, Normal),
        exposure("4", "DOT-USD", "Options", 650_000.0, 1.1, 35.8, 0.68, -22.1, Critical),
        exposure("5", "LINK-USD", "Spot", 420_000.0, 0.8, 29.4, 0.65, -9.8, Normal),
        exposure("6", "UNI-USD", "Futures", 380_000.0, 1.3, 41.2, 0.71, -25.6, Critical),
    ]
}

#[allow(clippy::too_many_arguments)]
fn attribution(
    id: &str,
    cryptocurrency: &str,
    time_period: &str,
    strategy: &str,
    total_pnl: f64,
    win_rate: f64,
    avg_trade: f64,
    trades: u32,
    volume: f64,
    sharpe_ratio: f64,
) -> Attribution {
    Attribution {
        id: id.into(),
        cryptocurrency: cryptocurrency.into(),
        time_period: time_period.into(),
        strategy: strategy.into(),
        total_pnl,
        win_rate,
        avg_trade,
        trades,
        volume,
        sharpe_ratio,
    }
}

pub fn attributions() -> Vec<Attribution> {
    vec![
        attribution("1", "Bitcoin (BTC)", "Last 7 Days", "Scalping", 15_420.50, 72.5, 245.30, 63, 2_450_000.0, 2.8),
        attribution("2", "Ethereum (ETH)", "Last 7 Days", "Swing Trading", 8_750.20, 65.2, 312.50, 28, 1_680_000.0, 2.1),
        attribution("3", "Cardano (ADA)", "Last 7 Days", "Arbitrage", 4_320.80, 78.9, 180.90, 38, 890_000.0, 3.2),
        attribution("4", "Solana (SOL)", "Last 7 Days", "Scalping", 2_890.40, 68.4, 195.20, 19, 560_000.0, 2.4),
        attribution("5", "Bitcoin (BTC)", "Last 30 Days", "Swing Trading", -1_250.30, 58.3, -89.31, 14, 1_200_000.0, 1.2),
        attribution("6", "Ethereum (ETH)", "Last 30 Days", "Arbitrage", 6_780.90, 71.4, 226.03, 30, 1_450_000.0, 2.6),
    ]
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    asset: &str,
    side: Side,
    entry_price: f64,
    exit_price: Option<f64>,
    quantity: f64,
    realized_pnl: Option<f64>,
    timestamp: &str,
    strategy: &str,
) -> Transaction {
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap_or_default();
    Transaction {
        id: id.into(),
        asset: asset.into(),
        side,
        entry_price,
        exit_price,
        quantity,
        realized_pnl,
        timestamp: parsed,
        strategy: strategy.into(),
        timestamp_text: parsed.format(TIMESTAMP_FORMAT).to_string(),
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("TXN-001", "BTC", Side::Buy, 43_250.00, Some(44_100.00), 0.5, Some(425.00), "2025-01-15 14:30:22", "Scalping"),
        transaction("TXN-002", "ETH", Side::Sell, 2_680.50, Some(2_645.20), 2.0, Some(-70.60), "2025-01-15 14:25:18", "Swing"),
        transaction("TXN-003", "ADA", Side::Buy, 0.4520, Some(0.4680), 1_000.0, Some(160.00), "2025-01-15 14:20:45", "Arbitrage"),
        transaction("TXN-004", "SOL", Side::Buy, 98.75, None, 5.0, None, "2025-01-15 14:15:33", "Swing"),
        transaction("TXN-005", "BTC", Side::Sell, 43_800.00, Some(43_950.00), 0.25, Some(37.50), "2025-01-15 14:10:12", "Scalping"),
    ]
}

fn news_item(id: &str, title: &str, source: &str, sentiment: f64, time: &str, impact: Impact, summary: &str) -> NewsItem {
    NewsItem {
        id: id.into(),
        title: title.into(),
        source: source.into(),
        sentiment,
        time: time.into(),
        impact,
        summary: summary.into(),
    }
}

pub fn news() -> Vec<NewsItem> {
    vec![
        news_item(
            "1",
            "Bitcoin ETF Approval Drives Market Sentiment Higher",
            "CryptoNews",
            85.0,
            "2 hours ago",
            Impact::High,
            "SEC approval of Bitcoin ETF applications has significantly boosted market confidence...",
        ),
        news_item(
            "2",
            "Ethereum Network Upgrade Shows Promising Results",
            "BlockchainDaily",
            72.0,
            "4 hours ago",
            Impact::Medium,
            "Latest network upgrade demonstrates improved transaction throughput and reduced fees...",
        ),
        news_item(
            "3",
            "Regulatory Concerns Impact Altcoin Performance",
            "CryptoRegulator",
            35.0,
            "6 hours ago",
            Impact::High,
            "New regulatory framework proposals have created uncertainty in the altcoin market...",
        ),
        news_item(
            "4",
            "DeFi Protocol Launches Innovative Yield Strategy",
            "DeFiInsider",
            78.0,
            "8 hours ago",
            Impact::Medium,
            "New yield farming protocol promises sustainable returns through innovative mechanisms...",
        ),
    ]
}

fn mention(id: &str, platform: &str, mentions: u32, sentiment: f64, trending: &str, change: f64) -> SocialMention {
    SocialMention {
        id: id.into(),
        platform: platform.into(),
        mentions,
        sentiment,
        trending: trending.into(),
        change,
        time: "Last hour".into(),
    }
}

pub fn social() -> Vec<SocialMention> {
    vec![
        mention("1", "Twitter", 12_450, 68.0, "#Bitcoin", 15.0),
        mention("2", "Reddit", 8_920, 72.0, "r/cryptocurrency", 8.0),
        mention("3", "Telegram", 5_680, 81.0, "ETH 2.0", 22.0),
        mention("4", "Discord", 3_240, 65.0, "NFT drops", -5.0),
    ]
}

pub fn notes() -> Vec<ResearchNote> {
    vec![
        ResearchNote::new(
            "1",
            "Q4 Market Analysis",
            "Key findings from quarterly market research including correlation patterns and sentiment analysis...",
            &["analysis", "quarterly", "correlation"],
            "2 days ago",
            "Research Team",
        ),
        ResearchNote::new(
            "2",
            "DeFi Sector Deep Dive",
            "Comprehensive analysis of DeFi protocols, yield farming strategies, and risk assessment...",
            &["defi", "yield", "risk"],
            "1 week ago",
            "DeFi Analyst",
        ),
        ResearchNote::new(
            "3",
            "Regulatory Impact Study",
            "Assessment of regulatory changes and their potential impact on cryptocurrency markets...",
            &["regulation", "compliance", "impact"],
            "2 weeks ago",
            "Compliance Team",
        ),
    ]
}

pub fn metric_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Total Market Cap", "$1.68T", 2.4, &[1.62, 1.63, 1.65, 1.66, 1.67, 1.68, 1.68]),
        MetricCard::new("24h Volume", "$89.2B", 5.7, &[85.0, 86.0, 87.0, 88.0, 89.0, 89.2, 89.2]),
        MetricCard::new("Fear & Greed Index", "72", 0.8, &[68.0, 70.0, 71.0, 72.0, 72.0, 72.0, 72.0]),
        MetricCard::new("BTC Dominance", "42.3%", -0.8, &[43.0, 42.8, 42.6, 42.5, 42.4, 42.3, 42.3]),
        MetricCard::new("Active Coins", "2,847", 12.0, &[2800.0, 2820.0, 2840.0, 2845.0, 2847.0, 2847.0, 2847.0]),
        MetricCard::new("Market Trend Score", "8.2/10", 0.3, &[7.8, 8.0, 8.1, 8.2, 8.2, 8.2, 8.2]),
    ]
}
