use chrono::NaiveDate;

use emlak_api::usecase::track_view::{MonthViewsUseCase, RecordViewUseCase, YearViewsUseCase};

use crate::helpers::MockTrackViewRepo;

#[tokio::test]
async fn two_views_on_the_same_day_share_one_row() {
    let usecase = RecordViewUseCase {
        repo: MockTrackViewRepo::empty(),
    };
    let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

    let first = usecase.execute(day).await.unwrap();
    let second = usecase.execute(day).await.unwrap();

    assert_eq!(first.views, 1);
    assert_eq!(second.views, 2);
    assert_eq!(first.id, second.id);
    assert_eq!(usecase.repo.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn views_on_different_days_get_their_own_rows() {
    let usecase = RecordViewUseCase {
        repo: MockTrackViewRepo::empty(),
    };
    usecase
        .execute(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap())
        .await
        .unwrap();
    usecase
        .execute(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap())
        .await
        .unwrap();
    assert_eq!(usecase.repo.rows.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn year_views_always_cover_twelve_months() {
    let record = RecordViewUseCase {
        repo: MockTrackViewRepo::empty(),
    };
    for _ in 0..3 {
        record
            .execute(NaiveDate::from_ymd_opt(2026, 4, 10).unwrap())
            .await
            .unwrap();
    }
    record
        .execute(NaiveDate::from_ymd_opt(2026, 4, 11).unwrap())
        .await
        .unwrap();
    record
        .execute(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        .await
        .unwrap();

    let usecase = YearViewsUseCase { repo: record.repo };
    let series = usecase.execute(2026).await.unwrap();

    assert_eq!(series.len(), 12);
    assert_eq!(series[3].month, "2026-04");
    assert_eq!(series[3].total, 4);
    assert_eq!(series[8].total, 1);
    let empty_months = series.iter().filter(|b| b.total == 0).count();
    assert_eq!(empty_months, 10);
}

#[tokio::test]
async fn month_total_sums_only_the_requested_month() {
    let record = RecordViewUseCase {
        repo: MockTrackViewRepo::empty(),
    };
    record
        .execute(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        .await
        .unwrap();
    record
        .execute(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap())
        .await
        .unwrap();
    record
        .execute(NaiveDate::from_ymd_opt(2026, 7, 31).unwrap())
        .await
        .unwrap();

    let usecase = MonthViewsUseCase { repo: record.repo };
    assert_eq!(usecase.execute(2026, 8).await.unwrap(), 2);
}
