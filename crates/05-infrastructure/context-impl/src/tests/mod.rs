//! 单元测试共用的 bean 夹具
