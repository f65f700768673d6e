// End-to-end tests for the CultuLa Backend API
//
// Each test boots the real router in-process on an ephemeral port with mock
// provider implementations and drives it over HTTP. Mocks record every call,
// so tests can assert not just the response shape but which providers were
// reached and with what arguments.
//
// Tests run in parallel by default; each one owns its server and mocks.

mod test_avatar;
mod test_listen;
mod test_ping;
