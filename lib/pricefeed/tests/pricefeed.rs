use pricefeed::{
    apply_block, init_genesis,
    model::{Asset, AssetKind, CurrentPrice, Oracle},
    Block, Context, GenesisState, Keeper, Msg, MsgPostPrice, PriceFeedError, PriceFeedStore,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ORACLES: [&str; 4] = ["cosmos1a", "cosmos1b", "cosmos1c", "cosmos1d"];

fn genesis() -> GenesisState {
    GenesisState {
        assets: vec![
            Asset::fungible("xrp", "Ripple", ""),
            Asset::fungible("btc", "Bitcoin", ""),
            Asset {
                code: "kitty".to_string(),
                name: "Kitty".to_string(),
                kind: AssetKind::NonFungible {
                    id: "7".to_string(),
                },
                description: String::new(),
            },
        ],
        oracles: ORACLES
            .iter()
            .map(|address| Oracle {
                address: address.to_string(),
            })
            .collect(),
    }
}

fn node() -> Keeper {
    let keeper = Keeper::new(PriceFeedStore::in_memory().unwrap());
    init_genesis(&keeper, &genesis()).unwrap();
    keeper
}

fn post(from: &str, asset_code: &str, price: Decimal, expiry: u64) -> Msg {
    Msg::PostPrice(MsgPostPrice {
        from: from.to_string(),
        asset_code: asset_code.to_string(),
        price,
        expiry,
    })
}

fn blocks() -> Vec<Block> {
    vec![
        Block {
            height: 1,
            messages: vec![
                post("cosmos1a", "xrp", dec!(1), 10),
                post("cosmos1b", "xrp", dec!(5), 20),
                post("cosmos1c", "xrp", dec!(3), 30),
                post("cosmos1a", "btc", dec!(7), 100),
            ],
        },
        Block {
            height: 2,
            messages: vec![
                post("cosmos1d", "xrp", dec!(2), 11),
                post("cosmos1z", "xrp", dec!(99), 50),
                post("cosmos1a", "kitty", dec!(12.5), 40),
            ],
        },
        Block {
            height: 15,
            messages: vec![post("cosmos1b", "btc", dec!(8), 14)],
        },
    ]
}

#[test]
fn test_identical_blocks_give_identical_state() {
    let first = node();
    let second = node();

    for block in blocks() {
        let a = apply_block(&first, &block).unwrap();
        let b = apply_block(&second, &block).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a.prices).unwrap(),
            serde_json::to_vec(&b.prices).unwrap()
        );
    }
    assert_eq!(
        first.store.state_hash().unwrap(),
        second.store.state_hash().unwrap()
    );
}

#[test]
fn test_replay_reports() {
    let keeper = node();
    let blocks = blocks();

    let report = apply_block(&keeper, &blocks[0]).unwrap();
    assert_eq!((report.accepted, report.rejected), (4, 0));
    // [1, 5, 3] -> 3, with the expiry of the price-3 submission
    assert_eq!(
        report.prices[0],
        CurrentPrice {
            asset_code: "xrp".to_string(),
            price: dec!(3),
            expiry: 30,
        }
    );
    assert_eq!(report.prices[1].price, dec!(7));
    assert_eq!(report.prices[1].expiry, 100);
    assert_eq!(report.prices[2], CurrentPrice::zero("kitty"));

    let report = apply_block(&keeper, &blocks[1]).unwrap();
    assert_eq!((report.accepted, report.rejected), (2, 1));
    // [1, 2, 3, 5] -> (2 + 3) / 2, expiry (11 + 30) / 2 rounded down
    assert_eq!(report.prices[0].price, dec!(2.5));
    assert_eq!(report.prices[0].expiry, 20);
    assert_eq!(report.prices[2].price, dec!(12.5));
    assert_eq!(
        keeper.get_current_price("kitty++7").unwrap(),
        report.prices[2]
    );

    // at height 15 only the xrp prices expiring at 20 and 30 are live and
    // the late btc submission is already expired
    let report = apply_block(&keeper, &blocks[2]).unwrap();
    assert_eq!((report.accepted, report.rejected), (0, 1));
    assert_eq!(report.prices[0].price, dec!(4));
    assert_eq!(report.prices[0].expiry, 25);
    assert_eq!(report.prices[1].price, dec!(7));
}

#[test]
fn test_expiry_boundary() {
    let keeper = node();
    let ctx = Context::at_height(50);
    let xrp = keeper.get_asset("xrp").unwrap().unwrap();

    keeper
        .set_price(&ctx, &xrp, "cosmos1a", dec!(1.1), 50)
        .unwrap();
    assert!(matches!(
        keeper.set_price(&ctx, &xrp, "cosmos1b", dec!(1.2), 49),
        Err(PriceFeedError::Expired { .. })
    ));

    keeper
        .set_current_prices(&ctx, &pricefeed::Median)
        .unwrap();
    let current = keeper.get_current_price("xrp").unwrap();
    assert_eq!(current.price, dec!(1.1));
    assert_eq!(current.expiry, 50);
}

#[test]
fn test_one_submission_per_oracle() {
    let keeper = node();
    let block = Block {
        height: 3,
        messages: vec![
            post("cosmos1a", "xrp", dec!(1), 10),
            post("cosmos1a", "xrp", dec!(2), 12),
        ],
    };
    apply_block(&keeper, &block).unwrap();

    let raw = keeper.get_raw_prices("xrp").unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].price, dec!(2));
    assert_eq!(raw[0].expiry, 12);
}

#[test]
fn test_unknown_oracle_changes_nothing() {
    let keeper = node();
    apply_block(&keeper, &blocks()[0]).unwrap();
    let before = keeper.get_raw_prices("xrp").unwrap();

    let res = pricefeed::deliver_msg(
        &keeper,
        &Context::at_height(4),
        &post("cosmos1stranger", "xrp", dec!(1000), 100),
    );
    assert!(matches!(res, Err(PriceFeedError::UnknownOracle(_))));
    assert_eq!(keeper.get_raw_prices("xrp").unwrap(), before);
}

#[test]
fn test_block_json_shape() {
    let raw = r#"[
        {"height": 1, "messages": [
            {"postPrice": {"from": "cosmos1a", "assetCode": "xrp", "price": "0.5", "expiry": 9}}
        ]},
        {"height": 2}
    ]"#;
    let blocks: Vec<Block> = serde_json::from_str(raw).unwrap();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[1].messages.is_empty());

    let keeper = node();
    for block in &blocks {
        apply_block(&keeper, block).unwrap();
    }
    assert_eq!(keeper.get_current_price("xrp").unwrap().price, dec!(0.5));
}
