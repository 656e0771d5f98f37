use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use atlas_scanner::coin::ontology::client::OntologyApi;
use atlas_scanner::coin::ontology::model::{
  AssetType, OntologyBlockList, OntologyBlockResult, OntologyTx, OntologyTxList, OntologyTxPage,
};
use atlas_scanner::normalizer::normalize;
use atlas_scanner::normalizer::types::{
  AnyAction, NativeTokenTransfer, Transfer, Tx, TxMeta, TxStatus, TxType,
};
use atlas_scanner::platform::{BlockApi, OntologyPlatform, TokenTxApi, TxApi};
use atlas_scanner::types::AppError;

const ONT_TRANSFER: &str = r#"
{
  "TxnType": 209,
  "ConfirmFlag": 1,
  "Fee": "0.010000000",
  "BlockIndex": 2,
  "TransferList": [
    {
      "FromAddress": "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7",
      "Amount": "2.000000000",
      "ToAddress": "AQ9kzzHNLCcyrPwJuVMrSPgGzqmuQNVwMF",
      "AssetName": "ont"
    }
  ],
  "TxnTime": 1556952450,
  "TxnHash": "4804e1be63ebe1715d6b4a039cc9d84b86cde74c8a8c8411578e6dcadc1e5405",
  "Height": 3411115
}"#;

const ONG_TRANSFER: &str = r#"
{
  "TxnType": 209,
  "ConfirmFlag": 1,
  "Fee": "0.010000000",
  "BlockIndex": 2,
  "TransferList": [
    {
      "FromAddress": "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7",
      "Amount": "2.1455",
      "ToAddress": "ASwdosWb2wH8Y3HYCYJpUJWWD3joyvvYGN",
      "AssetName": "ong"
    }
  ],
  "TxnTime": 1555341286,
  "TxnHash": "a483d1d854e47a20692f472d72ff45b9a2bfc542f84dceb3171a48f68ba322cb",
  "Height": 2863855
}"#;

const REWARD_TRANSFER: &str = r#"
{
  "TxnType": 209,
  "ConfirmFlag": 1,
  "Fee": "0.010000000",
  "BlockIndex": 1,
  "TransferList": [
    {
      "FromAddress": "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7",
      "Amount": "10.000000000",
      "ToAddress": "AQ9kzzHNLCcyrPwJuVMrSPgGzqmuQNVwMF",
      "AssetName": "ong"
    },
    {
      "FromAddress": "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7",
      "Amount": "0.010000000",
      "ToAddress": "AFmseVrdL9f9oyCzZefL9tG6UbviEH9ugK",
      "AssetName": "ong"
    }
  ],
  "TxnTime": 1556952520,
  "TxnHash": "eccbfd040925a22884d87e73f818f30ab42d06046460b86e9a042a1e9cba7561",
  "Height": 3411141
}"#;

const FEE_TRANSFER: &str = r#"
{
  "TxnType": 209,
  "ConfirmFlag": 1,
  "Fee": "0.010000000",
  "BlockIndex": 1,
  "TransferList": [
    {
      "FromAddress": "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7",
      "Amount": "0.010000000",
      "ToAddress": "AFmseVrdL9f9oyCzZefL9tG6UbviEH9ugK",
      "AssetName": "ong"
    }
  ],
  "TxnTime": 1556952520,
  "TxnHash": "eccbfd040925a22884d87e73f818f30ab42d06046460b86e9a042a1e9cba7561",
  "Height": 3411141
}"#;

fn parse(raw: &str) -> OntologyTx {
  serde_json::from_str(raw).unwrap()
}

#[test]
fn normalize_ont_transfer() {
  let tx = normalize(&parse(ONT_TRANSFER), AssetType::Ont).unwrap();
  assert_eq!(tx, Tx {
    id: "4804e1be63ebe1715d6b4a039cc9d84b86cde74c8a8c8411578e6dcadc1e5405".to_string(),
    coin: 1024,
    from: "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7".to_string(),
    to: "AQ9kzzHNLCcyrPwJuVMrSPgGzqmuQNVwMF".to_string(),
    fee: "10000000".to_string(),
    date: 1556952450,
    block: 3411115,
    status: TxStatus::Completed,
    tx_type: Some(TxType::Transfer),
    meta: Some(TxMeta::Transfer(Transfer {
      value: "2".to_string(),
      symbol: "ONT".to_string(),
      decimals: 0,
    })),
  });
}

#[test]
fn normalize_ong_transfer() {
  let tx = normalize(&parse(ONG_TRANSFER), AssetType::Ong).unwrap();
  assert_eq!(tx, Tx {
    id: "a483d1d854e47a20692f472d72ff45b9a2bfc542f84dceb3171a48f68ba322cb".to_string(),
    coin: 1024,
    from: "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7".to_string(),
    to: "ASwdosWb2wH8Y3HYCYJpUJWWD3joyvvYGN".to_string(),
    fee: "10000000".to_string(),
    date: 1555341286,
    block: 2863855,
    status: TxStatus::Completed,
    tx_type: Some(TxType::NativeTokenTransfer),
    meta: Some(TxMeta::NativeTokenTransfer(NativeTokenTransfer {
      name: "Ontology Gas".to_string(),
      symbol: "ONG".to_string(),
      token_id: "ong".to_string(),
      decimals: 9,
      value: "2145500000".to_string(),
      from: "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7".to_string(),
      to: "ASwdosWb2wH8Y3HYCYJpUJWWD3joyvvYGN".to_string(),
    })),
  });
}

#[test]
fn normalize_claim_reward() {
  let tx = normalize(&parse(REWARD_TRANSFER), AssetType::Ong).unwrap();
  assert_eq!(tx, Tx {
    id: "eccbfd040925a22884d87e73f818f30ab42d06046460b86e9a042a1e9cba7561".to_string(),
    coin: 1024,
    from: "AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7".to_string(),
    to: "AQ9kzzHNLCcyrPwJuVMrSPgGzqmuQNVwMF".to_string(),
    fee: "10000000".to_string(),
    date: 1556952520,
    block: 3411141,
    status: TxStatus::Completed,
    tx_type: Some(TxType::NativeTokenTransfer),
    meta: Some(TxMeta::AnyAction(AnyAction {
      coin: 1024,
      title: "Claim Rewards".to_string(),
      key: "stake_claim_rewards".to_string(),
      token_id: "ong".to_string(),
      name: "Ontology Gas".to_string(),
      symbol: "ONG".to_string(),
      decimals: 9,
      value: "10000000000".to_string(),
    })),
  });
}

#[test]
fn normalize_fee_only_is_rejected() {
  assert!(normalize(&parse(FEE_TRANSFER), AssetType::Ong).is_none());
}

#[test]
fn canonical_tx_serializes_with_wire_names() {
  let tx = normalize(&parse(REWARD_TRANSFER), AssetType::Ong).unwrap();
  let value = serde_json::to_value(&tx).unwrap();
  assert_eq!(value["type"], "native_token_transfer");
  assert_eq!(value["status"], "completed");
  assert_eq!(value["meta"]["key"], "stake_claim_rewards");
}

// ====== Platform against an in-memory explorer ======

#[derive(Default)]
struct FakeExplorer {
  txs: Vec<OntologyTx>,
  page_error: i64,
  block_list: Option<serde_json::Value>,
  block: Option<serde_json::Value>,
  fail: bool,
  requested_assets: Mutex<Vec<AssetType>>,
}

#[async_trait]
impl OntologyApi for FakeExplorer {
  async fn fetch_txs_of_address(&self, _address: &str, asset: AssetType) -> Result<OntologyTxPage, AppError> {
    self.requested_assets.lock().unwrap().push(asset);
    if self.fail {
      return Err(AppError::Client("connection refused".to_string()));
    }
    Ok(OntologyTxPage {
      error: self.page_error,
      result: OntologyTxList { txn_list: self.txs.clone() },
    })
  }

  async fn fetch_current_block(&self) -> Result<OntologyBlockList, AppError> {
    if self.fail {
      return Err(AppError::Client("connection refused".to_string()));
    }
    Ok(serde_json::from_value(self.block_list.clone().unwrap_or(json!({ "Error": 0, "Result": [] })))?)
  }

  async fn fetch_block_by_number(&self, _block_number: u64) -> Result<OntologyBlockResult, AppError> {
    Ok(serde_json::from_value(self.block.clone().unwrap_or(json!({ "Error": 0 })))?)
  }
}

fn platform(explorer: FakeExplorer) -> OntologyPlatform<FakeExplorer> {
  OntologyPlatform::new(Arc::new(explorer))
}

#[tokio::test]
async fn token_txs_skip_rejected_transactions() -> eyre::Result<()> {
  let explorer = FakeExplorer {
    txs: vec![parse(ONG_TRANSFER), parse(FEE_TRANSFER), parse(REWARD_TRANSFER)],
    ..Default::default()
  };
  let ontology = platform(explorer);

  let txs = ontology.get_token_txs_by_address("AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7", "ong").await?;

  assert_eq!(txs.len(), 2);
  assert_eq!(txs[0].id, "a483d1d854e47a20692f472d72ff45b9a2bfc542f84dceb3171a48f68ba322cb");
  assert!(matches!(txs[1].meta, Some(TxMeta::AnyAction(_))));
  Ok(())
}

#[tokio::test]
async fn txs_by_address_defaults_to_ont() -> eyre::Result<()> {
  let ontology = platform(FakeExplorer {
    txs: vec![parse(ONT_TRANSFER)],
    ..Default::default()
  });

  let txs = ontology.get_txs_by_address("AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7").await?;

  assert_eq!(txs.len(), 1);
  assert_eq!(txs[0].tx_type, Some(TxType::Transfer));
  assert_eq!(*ontology.client.requested_assets.lock().unwrap(), vec![AssetType::Ont]);
  Ok(())
}

#[tokio::test]
async fn unknown_token_yields_empty_page_without_request() -> eyre::Result<()> {
  let ontology = platform(FakeExplorer::default());

  let txs = ontology.get_token_txs_by_address("AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7", "oep4").await?;

  assert!(txs.is_empty());
  assert!(ontology.client.requested_assets.lock().unwrap().is_empty());
  Ok(())
}

#[tokio::test]
async fn fetch_failure_aborts_the_page() {
  let ontology = platform(FakeExplorer { fail: true, ..Default::default() });

  let result = ontology.get_txs_by_address("AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7").await;

  assert!(matches!(result, Err(AppError::Client(_))));
}

#[tokio::test]
async fn token_txs_surface_explorer_error() {
  let ontology = platform(FakeExplorer {
    txs: vec![parse(ONG_TRANSFER)],
    page_error: 61002,
    ..Default::default()
  });

  let result = ontology.get_token_txs_by_address("AUyL4TZ1zFEcSKDJrjFnD7vsq5iFZMZqT7", "ong").await;

  assert!(matches!(result, Err(AppError::Explorer { code: 61002 })));
}

#[tokio::test]
async fn current_block_number_reads_latest_height() -> eyre::Result<()> {
  let ontology = platform(FakeExplorer {
    block_list: Some(json!({ "Error": 0, "Result": [{ "Height": 9182771, "Hash": "h", "TxnList": [] }] })),
    ..Default::default()
  });

  assert_eq!(ontology.current_block_number().await?, 9182771);
  Ok(())
}

#[tokio::test]
async fn current_block_number_surfaces_explorer_error() {
  let ontology = platform(FakeExplorer {
    block_list: Some(json!({ "Error": 61001, "Result": [{ "Height": 1, "Hash": "h", "TxnList": [] }] })),
    ..Default::default()
  });

  let result = ontology.current_block_number().await;

  assert!(matches!(result, Err(AppError::Explorer { code: 61001 })));
}

#[tokio::test]
async fn current_block_number_empty_list_is_an_error() {
  let ontology = platform(FakeExplorer::default());
  assert!(matches!(ontology.current_block_number().await, Err(AppError::Block(_))));
}

#[tokio::test]
async fn block_by_number_uses_coarse_fields() -> eyre::Result<()> {
  let ontology = platform(FakeExplorer {
    block: Some(json!({
      "Error": 0,
      "Result": {
        "Height": 3411141,
        "Hash": "blockhash",
        "TxnList": [serde_json::from_str::<serde_json::Value>(REWARD_TRANSFER)?]
      }
    })),
    ..Default::default()
  });

  let block = ontology.get_block_by_number(3411141).await?;

  assert_eq!(block.number, 3411141);
  assert_eq!(block.id, "blockhash");
  assert_eq!(block.txs.len(), 1);
  let tx = &block.txs[0];
  assert_eq!(tx.id, "eccbfd040925a22884d87e73f818f30ab42d06046460b86e9a042a1e9cba7561");
  assert_eq!(tx.status, TxStatus::Completed);
  assert_eq!(tx.date, 1556952520);
  assert_eq!(tx.coin, 1024);
  assert!(tx.meta.is_none());
  assert!(tx.tx_type.is_none());
  Ok(())
}

#[tokio::test]
async fn block_by_number_surfaces_explorer_error() {
  let ontology = platform(FakeExplorer {
    block: Some(json!({ "Error": 1 })),
    ..Default::default()
  });

  assert!(matches!(ontology.get_block_by_number(5).await, Err(AppError::Explorer { code: 1 })));
  assert!(matches!(ontology.get_block_by_number(-1).await, Err(AppError::Block(_))));
}
