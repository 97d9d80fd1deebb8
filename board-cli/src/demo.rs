//! Built-in demo data for `--mock`.

use postboard_client::{Comment, MockRemote, Post, PostId};

/// A mock remote serving a small fixed board.
pub fn remote() -> MockRemote {
    MockRemote::with_fixture(posts(), comments())
}

fn posts() -> Vec<Post> {
    vec![
        Post::new(
            PostId::new(1),
            "Welcome to Postboard",
            "This board is served from built-in demo data.",
        ),
        Post::new(
            PostId::new(2),
            "Release notes",
            "Search is case-insensitive and matches titles only.",
        ),
        Post::new(
            PostId::new(3),
            "Quiet week",
            "Nothing much happened.",
        ),
    ]
}

fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            post_id: PostId::new(1),
            name: "First!".into(),
            email: Some("ana@example.com".into()),
            body: "Glad to be here.".into(),
        },
        Comment {
            id: 2,
            post_id: PostId::new(1),
            name: "Question".into(),
            email: None,
            body: "Where does the real data come from?".into(),
        },
        Comment {
            id: 3,
            post_id: PostId::new(2),
            name: "Nice".into(),
            email: Some("lee@example.com".into()),
            body: "Filtering works great.".into(),
        },
    ]
}
