//! Tests for asset domain models.

#[cfg(test)]
mod tests {
    use crate::assets::{
        holdings_from_records, AssetRecord, AssetStatus, Category, CodedRecord, Holding, Location,
        ProcurementSource,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record(value: serde_json::Value) -> AssetRecord {
        serde_json::from_value(value).unwrap()
    }

    // AssetStatus

    #[test]
    fn test_status_parse_known_values() {
        assert_eq!(AssetStatus::parse("baik"), AssetStatus::Baik);
        assert_eq!(AssetStatus::parse("RUSAK"), AssetStatus::Rusak);
        assert_eq!(AssetStatus::parse(" tidak_memadai "), AssetStatus::TidakMemadai);
        assert_eq!(AssetStatus::parse("Hilang"), AssetStatus::Hilang);
        assert_eq!(AssetStatus::parse(""), AssetStatus::Baik);
    }

    #[test]
    fn test_status_keeps_unknown_values() {
        let status = AssetStatus::parse(" Dipinjam ");
        assert_eq!(status, AssetStatus::Other("Dipinjam".to_string()));
        assert_eq!(status.as_str(), "Dipinjam");
        assert_eq!(status.label(), "Dipinjam");
    }

    #[test]
    fn test_status_labels_and_display() {
        assert_eq!(AssetStatus::TidakMemadai.label(), "Tidak Memadai");
        assert_eq!(AssetStatus::TidakMemadai.to_string(), "tidak_memadai");
        assert_eq!(AssetStatus::default(), AssetStatus::Baik);
    }

    #[test]
    fn test_status_serde_goes_through_string() {
        let status: AssetStatus = serde_json::from_str("\"HILANG\"").unwrap();
        assert_eq!(status, AssetStatus::Hilang);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"hilang\"");
    }

    // ProcurementSource

    #[test]
    fn test_procurement_source_digits() {
        let digits: Vec<u8> = ProcurementSource::ALL.iter().map(|s| s.digit()).collect();
        assert_eq!(digits, vec![1, 2, 3, 4]);
        let labels: Vec<&str> = ProcurementSource::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Pembelian", "Bantuan", "STTST", "Hibah"]);
    }

    // AssetRecord lenient parsing

    #[test]
    fn test_record_accepts_numeric_strings() {
        let r = record(json!({
            "acquisitionCost": "12500000.50",
            "economicLifeYears": "8",
            "bulkTotalCount": " 3 ",
            "residualValue": 1000.25,
        }));
        assert_eq!(r.acquisition_cost, Some(dec!(12500000.50)));
        assert_eq!(r.economic_life_years, Some(8));
        assert_eq!(r.bulk_total_count, Some(3));
        assert_eq!(r.residual_value, Some(dec!(1000.25)));
    }

    #[test]
    fn test_record_reads_garbage_as_absent() {
        let r = record(json!({
            "acquisitionCost": "Rp 1.000",
            "acquisitionDate": "kemarin",
            "economicLifeYears": 2.5,
            "bulkTotalCount": -4,
            "accumulatedDepreciation": [1, 2],
            "isBulkParent": "yes",
        }));
        assert_eq!(r.acquisition_cost, None);
        assert_eq!(r.acquisition_date, None);
        assert_eq!(r.economic_life_years, None);
        assert_eq!(r.bulk_total_count, None);
        assert_eq!(r.accumulated_depreciation, None);
        assert!(!r.is_bulk_parent);
    }

    #[test]
    fn test_record_accepts_backend_column_names() {
        let r = record(json!({
            "kode": "003.20.4.23.011",
            "harga_perolehan": 750000,
            "tanggal_perolehan": "2023-02-28",
            "umur_ekonomis_tahun": 4,
            "nilai_sisa": "500000",
            "akumulasi_penyusutan": "250000",
            "bulk_total_count": 12,
            "is_bulk_parent": 1,
            "lokasi_id": 7,
            "category_id": "c-9",
            "asal_pengadaan": "Hibah",
        }));
        assert_eq!(r.code.as_deref(), Some("003.20.4.23.011"));
        assert_eq!(r.acquisition_cost, Some(dec!(750000)));
        assert_eq!(r.acquisition_date, NaiveDate::from_ymd_opt(2023, 2, 28));
        assert_eq!(r.economic_life_years, Some(4));
        assert_eq!(r.residual_value, Some(dec!(500000)));
        assert_eq!(r.accumulated_depreciation, Some(dec!(250000)));
        assert_eq!(r.bulk_total_count, Some(12));
        assert!(r.is_bulk_parent);
        assert_eq!(r.location_id.as_deref(), Some("7"));
        assert_eq!(r.category_id.as_deref(), Some("c-9"));
        assert_eq!(r.procurement_source.as_deref(), Some("Hibah"));
        assert_eq!(r.asset_code(), "003.20.4.23.011");
    }

    #[test]
    fn test_record_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 30);
        for raw in [
            "2024-06-30",
            "2024-06-30T23:59:59Z",
            "2024-06-30T10:00:00+07:00",
            "2024-06-30T08:15:00",
            "2024-06-30T08:15:00.250",
        ] {
            let r = record(json!({ "acquisitionDate": raw }));
            assert_eq!(r.acquisition_date, expected, "failed for {raw}");
        }
    }

    #[test]
    fn test_record_nulls_and_empty_strings() {
        let r = record(json!({
            "code": null,
            "acquisitionCost": "",
            "acquisitionDate": " ",
            "status": null,
        }));
        assert_eq!(r, AssetRecord::default());
    }

    // into_holding coercions

    #[test]
    fn test_into_holding_coerces_missing_and_negative_money() {
        let holding = record(json!({
            "code": "001.10.1.24.001",
            "residualValue": -500,
            "accumulatedDepreciation": "-1",
        }))
        .into_holding();
        let asset = holding.asset();
        assert_eq!(asset.acquisition_cost, Decimal::ZERO);
        // Negative becomes zero, and stored zero counts as absent.
        assert_eq!(asset.residual_value, None);
        assert_eq!(asset.accumulated_depreciation, None);
    }

    #[test]
    fn test_into_holding_negative_cost_is_zero() {
        let holding = record(json!({ "acquisitionCost": -2_000_000 })).into_holding();
        assert_eq!(holding.asset().acquisition_cost, Decimal::ZERO);
    }

    #[test]
    fn test_into_holding_normalizes_fields() {
        let holding = record(json!({
            "code": "001.10.1.24.001",
            "acquisitionCost": 100,
            "economicLifeYears": 0,
            "status": "Rusak",
            "categoryId": "  ",
            "locationId": "",
            "procurementSource": "Pembelian",
        }))
        .into_holding();
        let asset = holding.asset();
        assert_eq!(asset.economic_life_years, None);
        assert_eq!(asset.status, AssetStatus::Rusak);
        assert_eq!(asset.category_id, None);
        assert_eq!(asset.location_id, None);
        assert_eq!(asset.procurement_source.as_deref(), Some("Pembelian"));
    }

    #[test]
    fn test_into_holding_bulk_counts() {
        let single = record(json!({ "acquisitionCost": 1 })).into_holding();
        assert!(matches!(single, Holding::Single(_)));
        assert_eq!(single.unit_count(), 1);

        let zero = record(json!({ "bulkTotalCount": 0 })).into_holding();
        assert!(!zero.is_bulk());
        assert_eq!(zero.unit_count(), 1);

        let bulk = record(json!({
            "code": "002.20.2.25.004",
            "bulkTotalCount": 25,
            "isBulkParent": true,
        }))
        .into_holding();
        assert!(bulk.is_bulk());
        assert_eq!(bulk.unit_count(), 25);
        assert!(bulk.asset().is_bulk_parent);
        assert_eq!(bulk.scale(dec!(1.5)), dec!(37.5));
        assert_eq!(single.scale(dec!(1.5)), dec!(1.5));
        assert_eq!(bulk.asset_code(), "002.20.2.25.004");
    }

    #[test]
    fn test_scale_saturates_instead_of_overflowing() {
        let bulk = record(json!({
            "acquisitionCost": "50000000000000000000000000000",
            "bulkTotalCount": 2,
        }))
        .into_holding();
        let cost = bulk.asset().acquisition_cost;
        assert_eq!(bulk.scale(cost), Decimal::MAX);
        assert_eq!(bulk.scale(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_holdings_from_records_preserves_order() {
        let records = vec![
            record(json!({ "code": "b" })),
            record(json!({ "code": "a", "bulkTotalCount": 2 })),
        ];
        let holdings = holdings_from_records(&records);
        let codes: Vec<&str> = holdings.iter().map(|h| h.asset_code()).collect();
        assert_eq!(codes, vec!["b", "a"]);
        assert_eq!(Holding::from(records[1].clone()).unit_count(), 2);
    }

    #[test]
    fn test_asset_serializes_camel_case() {
        let holding = record(json!({
            "code": "001.10.1.24.001",
            "acquisitionCost": 10,
            "status": "hilang",
        }))
        .into_holding();
        let value = serde_json::to_value(holding.asset()).unwrap();
        assert_eq!(value["code"], json!("001.10.1.24.001"));
        assert_eq!(value["status"], json!("hilang"));
        assert!(value.get("acquisitionCost").is_some());
        assert!(value.get("isBulkParent").is_some());
    }

    // Registry records

    #[test]
    fn test_location_and_category_deserialize() {
        let location: Location =
            serde_json::from_value(json!({ "id": 4, "code": "004", "nama": "Lab Komputer" }))
                .unwrap();
        assert_eq!(location.id.as_deref(), Some("4"));
        assert_eq!(location.name.as_deref(), Some("Lab Komputer"));

        let category: Category = serde_json::from_value(json!({ "code": "30" })).unwrap();
        assert_eq!(category.id, None);
        assert_eq!(category.code, "30");
        assert_eq!(category.name, None);
    }
}
