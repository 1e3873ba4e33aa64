use std::sync::Arc;

use mailform_core_form_contracts::{
    digest::MockFormDigestService, dispatch::MockFormDispatchService,
};
use mailform_demo::DEFAULTS;
use mailform_shared_contracts::dump::MockDumpService;

use crate::{FormFeatureConfig, FormFeatureServiceImpl};

mod preview;
mod round_trip;

type Sut = FormFeatureServiceImpl<MockFormDigestService, MockFormDispatchService, MockDumpService>;

fn config(debug: bool) -> FormFeatureConfig {
    FormFeatureConfig {
        defaults: Arc::new(DEFAULTS.clone()),
        debug,
    }
}

fn make_sut(digest: MockFormDigestService, dispatch: MockFormDispatchService) -> Sut {
    FormFeatureServiceImpl {
        digest,
        dispatch,
        dump: MockDumpService::new().ignoring(),
        config: config(false),
    }
}
