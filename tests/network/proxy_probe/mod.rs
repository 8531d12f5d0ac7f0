/*!
Proxy probe tests module.

Tests for proxy address handling, probe execution with a mock client,
report rendering, and end-to-end requests through a fake local proxy.
*/
