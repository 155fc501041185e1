use movielens_db::*;
use rusqlite::params;

fn insert_movie(conn: &Connection, id: i64, title: &str, release_date: &str) {
    conn.execute(
        "INSERT INTO Movies (Movie_ID, Title, Release_Date, Runtime, Original_Language, Budget, Revenue)
         VALUES (?1, ?2, ?3, 120, 'en', 1000000, 2500000)",
        params![id, title, release_date],
    )
    .unwrap();
}

fn insert_ratings(conn: &Connection, id: i64, ratings: &[i64]) {
    for rating in ratings {
        conn.execute(
            "INSERT INTO Ratings (Movie_ID, Rating) VALUES (?1, ?2)",
            params![id, rating],
        )
        .unwrap();
    }
}

fn setup_db() -> Connection {
    let conn = open_memory().unwrap();
    insert_movie(&conn, 1, "The Matrix", "1999-03-30");
    insert_movie(&conn, 2, "Heat", "1995-12-15 00:00:00");
    insert_movie(&conn, 3, "Alien", "1979-05-25");
    insert_movie(&conn, 4, "Aliens", "1986-07-18");
    insert_movie(&conn, 5, "Zardoz", "1974-02-06");

    insert_ratings(&conn, 1, &[9, 8, 10]);
    insert_ratings(&conn, 2, &[7, 8, 8]);
    insert_ratings(&conn, 3, &[9, 9]);
    insert_ratings(&conn, 4, &[6]);

    conn.execute_batch(
        "INSERT INTO Genres (Genre_ID, Genre_Name) VALUES (1, 'Science Fiction'), (2, 'Action'), (3, 'Horror');
         INSERT INTO Movie_Genres (Movie_ID, Genre_ID) VALUES (1, 1), (1, 2), (3, 3), (3, 1);
         INSERT INTO Companies (Company_ID, Company_Name) VALUES (1, 'Warner Bros.'), (2, 'Village Roadshow'), (3, 'Brandywine');
         INSERT INTO Movie_Production_Companies (Movie_ID, Company_ID) VALUES (1, 1), (1, 2), (3, 3);
         INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES (3, 'In space no one can hear you scream.');",
    )
    .unwrap();

    conn
}

// ── Counters ────────────────────────────────────────────────────────────────

#[test]
fn counters() {
    let conn = setup_db();
    assert_eq!(num_movies(&conn), Some(5));
    assert_eq!(num_reviews(&conn), Some(9));

    let counts = database_counts(&conn).unwrap();
    assert_eq!(counts.movies, 5);
    assert_eq!(counts.reviews, 9);
}

// ── Search ──────────────────────────────────────────────────────────────────

#[test]
fn search_orders_by_title() {
    let conn = setup_db();
    let results = search_movies(&conn, "%");
    let titles: Vec<&str> = results.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Alien", "Aliens", "Heat", "The Matrix", "Zardoz"]);
}

#[test]
fn search_reports_year_only() {
    let conn = setup_db();
    let results = search_movies(&conn, "Heat");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 2);
    assert_eq!(results[0].release_year, "1995");
}

#[test]
fn search_wildcards() {
    let conn = setup_db();

    let results = search_movies(&conn, "Alien_");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Aliens");

    let results = search_movies(&conn, "Alien%");
    assert_eq!(results.len(), 2);

    // SQLite LIKE is case-insensitive for ASCII
    let results = search_movies(&conn, "%matrix%");
    assert_eq!(results.len(), 1);
}

#[test]
fn search_without_wildcards_is_exact() {
    let conn = setup_db();
    assert!(search_movies(&conn, "Alie").is_empty());
}

#[test]
fn search_no_match_is_empty() {
    let conn = setup_db();
    assert!(search_movies(&conn, "Casablanca").is_empty());
    assert!(search_movies(&conn, "").is_empty());
}

#[test]
fn search_missing_release_date_has_empty_year() {
    let conn = setup_db();
    conn.execute(
        "INSERT INTO Movies (Movie_ID, Title) VALUES (6, 'Untitled Project')",
        [],
    )
    .unwrap();
    let results = search_movies(&conn, "Untitled%");
    assert_eq!(results[0].release_year, "");
}

#[test]
fn search_is_not_capped() {
    let conn = open_memory().unwrap();
    for id in 0..250 {
        insert_movie(&conn, id, &format!("Movie {:03}", id), "2001-01-01");
    }
    let results = search_movies(&conn, "%");
    assert_eq!(results.len(), 250);
    assert!(results.len() > SEARCH_DISPLAY_LIMIT);
}

// ── Details ─────────────────────────────────────────────────────────────────

#[test]
fn details_for_unknown_movie() {
    let conn = setup_db();
    assert_eq!(movie_details(&conn, 999), None);
}

#[test]
fn details_with_no_reviews_or_tagline() {
    let conn = setup_db();
    let detail = movie_details(&conn, 5).unwrap();
    assert_eq!(detail.title, "Zardoz");
    assert_eq!(detail.review_count, 0);
    assert_eq!(detail.average_rating, 0.0);
    assert_eq!(detail.tagline, "");
    assert!(detail.genres.is_empty());
    assert!(detail.production_companies.is_empty());
}

#[test]
fn details_full_record() {
    let conn = setup_db();
    let detail = movie_details(&conn, 3).unwrap();
    assert_eq!(detail.id, 3);
    assert_eq!(detail.release_date, "1979-05-25");
    assert_eq!(detail.runtime_minutes, Some(120));
    assert_eq!(detail.original_language, "en");
    assert_eq!(detail.budget, 1_000_000);
    assert_eq!(detail.revenue, 2_500_000);
    assert_eq!(detail.review_count, 2);
    assert_eq!(detail.average_rating, 9.0);
    assert_eq!(detail.tagline, "In space no one can hear you scream.");
    assert_eq!(detail.genres, ["Horror", "Science Fiction"]);
    assert_eq!(detail.production_companies, ["Brandywine"]);
}

#[test]
fn details_average_is_rounded() {
    let conn = setup_db();
    // 7, 8, 8 => 7.666...
    let detail = movie_details(&conn, 2).unwrap();
    assert_eq!(detail.review_count, 3);
    assert_eq!(detail.average_rating, 7.67);
}

#[test]
fn details_release_date_drops_time() {
    let conn = setup_db();
    let detail = movie_details(&conn, 2).unwrap();
    assert_eq!(detail.release_date, "1995-12-15");
}

#[test]
fn details_lists_are_alphabetical() {
    let conn = setup_db();
    let detail = movie_details(&conn, 1).unwrap();
    assert_eq!(detail.genres, ["Action", "Science Fiction"]);
    assert_eq!(
        detail.production_companies,
        ["Village Roadshow", "Warner Bros."]
    );
}

#[test]
fn details_null_runtime() {
    let conn = setup_db();
    conn.execute(
        "INSERT INTO Movies (Movie_ID, Title, Release_Date) VALUES (7, 'Short', '2020-01-01')",
        [],
    )
    .unwrap();
    let detail = movie_details(&conn, 7).unwrap();
    assert_eq!(detail.runtime_minutes, None);
    assert_eq!(detail.original_language, "");
    assert_eq!(detail.budget, 0);
}

// ── Ranking ─────────────────────────────────────────────────────────────────

#[test]
fn top_movies_ordered_by_average() {
    let conn = setup_db();
    let top = top_movies(&conn, 10, 1);
    let ids: Vec<i64> = top.iter().map(|m| m.id).collect();
    // Matrix 9.0 (3 reviews) beats Alien 9.0 (2 reviews) on count
    assert_eq!(ids, [1, 3, 2, 4]);
    assert_eq!(top[0].review_count, 3);
    assert_eq!(top[0].average_rating, 9.0);
    assert_eq!(top[0].release_year, "1999");
}

#[test]
fn top_movies_respects_threshold_and_limit() {
    let conn = setup_db();

    let top = top_movies(&conn, 10, 3);
    let ids: Vec<i64> = top.iter().map(|m| m.id).collect();
    assert_eq!(ids, [1, 2]);

    let top = top_movies(&conn, 1, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, 1);
}

#[test]
fn top_movies_average_is_unrounded() {
    let conn = setup_db();
    let top = top_movies(&conn, 10, 3);
    let heat = top.iter().find(|m| m.id == 2).unwrap();
    assert!((heat.average_rating - 23.0 / 3.0).abs() < 1e-9);
}

#[test]
fn top_movies_nothing_qualifies() {
    let conn = setup_db();
    assert!(top_movies(&conn, 5, 1000).is_empty());
}

#[test]
fn top_movies_only_two_with_enough_reviews() {
    let conn = open_memory().unwrap();
    insert_movie(&conn, 1, "Popular and good", "2000-01-01");
    insert_movie(&conn, 2, "Popular and fine", "2000-01-01");
    insert_movie(&conn, 3, "Obscure", "2000-01-01");
    insert_ratings(&conn, 1, &[9; 120]);
    insert_ratings(&conn, 2, &[6; 100]);
    insert_ratings(&conn, 3, &[10; 99]);

    let top = top_movies(&conn, 3, 100);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, 1);
    assert_eq!(top[1].id, 2);
    assert_eq!(top[1].review_count, 100);
}

#[test]
fn top_movies_invariants_hold() {
    let conn = setup_db();
    for n in 1..=5 {
        for threshold in 1..=4 {
            let top = top_movies(&conn, n, threshold);
            assert!(top.len() as i64 <= n);
            assert!(top.iter().all(|m| m.review_count >= threshold));
            for pair in top.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(a.average_rating >= b.average_rating);
                if a.average_rating == b.average_rating {
                    assert!(a.review_count >= b.review_count);
                }
            }
        }
    }
}

// ── Store failures ──────────────────────────────────────────────────────────

// A broken store is indistinguishable from an empty one at this layer.
#[test]
fn store_failure_looks_like_no_data() {
    let conn = setup_db();
    conn.execute_batch("DROP TABLE Movie_Taglines; DROP TABLE Ratings;")
        .unwrap();

    assert_eq!(search_movies(&conn, "%").len(), 5);
    assert_eq!(movie_details(&conn, 3), None);
    assert!(top_movies(&conn, 10, 1).is_empty());
    assert_eq!(num_reviews(&conn), None);
    assert_eq!(database_counts(&conn), None);
}
