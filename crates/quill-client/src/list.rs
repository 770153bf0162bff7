//! The post-list state machine: a cached copy of the remote collection and
//! the create-post form. A rendering layer reads `posts()` and `form()` and
//! feeds user actions back in through the mutating methods.

use tracing::{debug, error};

use quill_types::models::Post;

use crate::service::PostService;

/// Per-field validation messages, shown inline next to the offending field.
/// `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// State of the create-post form. Fields are plain text mirrors of the
/// inputs; `open` decides whether the form is shown at all.
#[derive(Debug, Clone, Default)]
pub struct CreatePostForm {
    pub open: bool,
    pub title: String,
    pub body: String,
    pub author: String,
    pub errors: FieldErrors,
}

impl CreatePostForm {
    fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
        self.author.clear();
        self.errors = FieldErrors::default();
    }
}

/// Client-side view of the post collection.
///
/// The cache is disposable: every successful sync replaces it wholesale
/// with a fresh snapshot from the service, and a failed sync leaves it
/// exactly as it was. It is never a source of truth.
///
/// All methods take `&mut self`, so one client never overlaps its own
/// remote calls. Nothing stops a UI from running two submits on separate
/// client instances at once; the original behaves the same way.
pub struct PostListClient<S: PostService> {
    service: S,
    posts: Vec<Post>,
    form: CreatePostForm,
}

impl<S: PostService> PostListClient<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            posts: Vec::new(),
            form: CreatePostForm::default(),
        }
    }

    /// The cached post list, in creation order. Read-only; refreshed by
    /// `refresh()` and after each successful submit.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn form(&self) -> &CreatePostForm {
        &self.form
    }

    /// Replace the cache with a fresh snapshot from the service.
    ///
    /// On failure the previous list stays displayed; the error goes to the
    /// operator log only.
    pub async fn refresh(&mut self) {
        match self.service.get_posts().await {
            Ok(posts) => {
                debug!("fetched {} posts", posts.len());
                self.posts = posts;
            }
            Err(e) => error!("failed to fetch posts: {}", e),
        }
    }

    /// Open the create form with blank fields.
    pub fn open_form(&mut self) {
        self.form.reset();
        self.form.open = true;
    }

    /// Close the form. Entered values are kept until the next open.
    pub fn close_form(&mut self) {
        self.form.open = false;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.form.body = body.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.form.author = author.into();
    }

    /// Submit the form: validate, create, then re-fetch the list.
    ///
    /// Validation failures keep the form open with inline messages and make
    /// no remote call. A create failure also keeps the form open, values
    /// retained, and is only logged. On success the form closes and clears
    /// before the refresh goes out.
    pub async fn submit(&mut self) {
        if !self.form.open {
            return;
        }

        self.form.errors = validate(&self.form);
        if !self.form.errors.is_empty() {
            return;
        }

        // An empty author box means anonymous, not an author named "".
        let author = if self.form.author.is_empty() {
            None
        } else {
            Some(self.form.author.as_str())
        };

        match self
            .service
            .create_post(&self.form.title, &self.form.body, author)
            .await
        {
            Ok(id) => {
                debug!("created post {}", id);
                self.form.open = false;
                self.form.reset();
                self.refresh().await;
            }
            Err(e) => error!("failed to create post: {}", e),
        }
    }
}

fn validate(form: &CreatePostForm) -> FieldErrors {
    FieldErrors {
        title: form.title.is_empty().then_some("Title is required"),
        body: form.body.is_empty().then_some("Body is required"),
    }
}
