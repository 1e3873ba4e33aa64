use mailform_models::{
    form::{FormDigest, FormSubmission},
    request::RequestContext,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormDigestService: Send + Sync + 'static {
    /// Derives the digest binding the fields of `submission` to the secret
    /// salt.
    fn compute(&self, submission: &FormSubmission) -> FormDigest;

    /// Checks that `candidate` is the digest of `submission` and that the
    /// declared body length, if any, matches the body.
    ///
    /// Mismatches are recorded to the digest failure log together with the
    /// provenance of the request.
    fn verify(
        &self,
        candidate: &FormDigest,
        declared_length: Option<usize>,
        submission: &FormSubmission,
        context: &RequestContext,
    ) -> bool;
}

#[cfg(feature = "mock")]
impl MockFormDigestService {
    pub fn with_compute(mut self, submission: FormSubmission, result: FormDigest) -> Self {
        self.expect_compute()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| result);
        self
    }

    pub fn with_verify(
        mut self,
        candidate: FormDigest,
        declared_length: Option<usize>,
        submission: FormSubmission,
        context: RequestContext,
        result: bool,
    ) -> Self {
        self.expect_verify()
            .once()
            .with(
                mockall::predicate::eq(candidate),
                mockall::predicate::eq(declared_length),
                mockall::predicate::eq(submission),
                mockall::predicate::eq(context),
            )
            .return_once(move |_, _, _, _| result);
        self
    }
}
