#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::{assert_close, pos_resource};

    #[test]
    fn emlid_qualities() {
        // 10 rows: 6 fixed, 3 float, 1 single
        let summary = QualitySummary::from_path(&pos_resource("emlid.pos")).unwrap();
        assert_eq!(summary.total, 10);
        assert_eq!(summary.q1, 6);
        assert_eq!(summary.q2, 3);
        assert_close(summary.q1_percent, 60.0, 1.0E-9);
        assert_close(summary.q2_percent, 30.0, 1.0E-9);
        assert_close(summary.other_percent(), 10.0, 1.0E-9);
        assert!(summary.q1_percent + summary.q2_percent < 100.0);
    }

    #[test]
    fn rtk_qualities() {
        let summary = QualitySummary::from_path(&pos_resource("rtk.pos")).unwrap();
        assert_eq!(summary.total, 10);
        assert_close(summary.q1_percent, 90.0, 1.0E-9);
        assert_close(summary.q2_percent, 10.0, 1.0E-9);
        assert_close(summary.q1_percent + summary.q2_percent, 100.0, 1.0E-9);
    }

    #[test]
    fn bounded_percentages() {
        for flags in [
            vec![1, 1, 1],
            vec![2, 2],
            vec![5, 4, 6],
            vec![1, 2, 3, 4, 5, 6],
            vec![1],
        ] {
            let summary = QualitySummary::from_flags(flags.clone()).unwrap();
            assert!(summary.q1_percent >= 0.0 && summary.q1_percent <= 100.0);
            assert!(summary.q2_percent >= 0.0 && summary.q2_percent <= 100.0);
            let sum = summary.q1_percent + summary.q2_percent;
            if flags.iter().all(|q| *q == 1 || *q == 2) {
                assert_close(sum, 100.0, 1.0E-9);
            } else {
                assert!(sum < 100.0, "{:?}: {}", flags, sum);
            }
        }
    }

    #[test]
    fn empty_dataset() {
        assert!(matches!(
            QualitySummary::from_flags(Vec::<u8>::new()),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn no_data_row() {
        assert!(matches!(
            QualitySummary::from_path(&pos_resource("no_data.pos")),
            Err(Error::NoDataStart)
        ));
    }

    #[test]
    fn malformed_row() {
        match QualitySummary::from_path(&pos_resource("malformed.pos")) {
            Err(Error::Parsing { line, error }) => {
                assert_eq!(line, 11);
                assert_eq!(error, ParsingError::MissingColumn(5));
            },
            other => panic!("expecting parsing error, got {:?}", other),
        }
    }
}
